//! Command keyword dispatch and argument assembly
//!
//! Splits a raw input line into keyword and argument text, expands keyword
//! aliases to their canonical form, runs the field scanner with the command's
//! field spec, and validates every field value into a typed [`Command`].
//!
//! This module is pure: it holds no state and never touches the ledgers.

use chrono::NaiveDate;

use super::fields::{self, FieldSpec, AMOUNT, CATEGORY, DATE, FILE, INDEX, MONTH, NOTE};
use super::primitives::{
    self, parse_amount, parse_date, parse_filename, parse_index, parse_limit, parse_month,
    DatePolicy,
};
use crate::error::{TallyError, TallyResult};
use crate::models::{
    Expense, ExpenseCategory, ExpensePatch, Income, IncomePatch, YearMonth,
};

/// A fully validated user command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddExpense(Expense),
    AddIncome(Income),
    DeleteExpense { index: usize },
    DeleteIncome { index: usize },
    ModifyExpense { index: usize, patch: ExpensePatch },
    ModifyIncome { index: usize, patch: IncomePatch },
    ListExpenses { month: Option<YearMonth> },
    ListIncomes { month: Option<YearMonth> },
    SetBudget { category: ExpenseCategory, limit: f64 },
    DeleteBudget { category: ExpenseCategory },
    ListBudgets,
    Summary,
    Balance,
    Export { filename: String },
    Help,
    Exit,
}

const ADD_SPEC: FieldSpec = FieldSpec {
    required: &[AMOUNT, CATEGORY, DATE],
    optional: &[NOTE],
    note: Some(NOTE),
};

const DELETE_SPEC: FieldSpec = FieldSpec {
    required: &[INDEX],
    optional: &[],
    note: None,
};

const MODIFY_SPEC: FieldSpec = FieldSpec {
    required: &[INDEX],
    optional: &[AMOUNT, CATEGORY, DATE, NOTE],
    note: Some(NOTE),
};

const LIST_SPEC: FieldSpec = FieldSpec {
    required: &[],
    optional: &[MONTH],
    note: None,
};

const SET_BUDGET_SPEC: FieldSpec = FieldSpec {
    required: &[CATEGORY, AMOUNT],
    optional: &[],
    note: None,
};

const DELETE_BUDGET_SPEC: FieldSpec = FieldSpec {
    required: &[CATEGORY],
    optional: &[],
    note: None,
};

const EXPORT_SPEC: FieldSpec = FieldSpec {
    required: &[FILE],
    optional: &[],
    note: None,
};

/// Expand a keyword alias to its canonical command name.
///
/// Canonical names map to themselves, so expansion is idempotent.
pub fn canonical(keyword: &str) -> &str {
    match keyword {
        "ae" => "add-expense",
        "ai" => "add-income",
        "de" => "delete-expense",
        "di" => "delete-income",
        "me" => "modify-expense",
        "mi" => "modify-income",
        "le" => "list-expenses",
        "li" => "list-incomes",
        "sb" => "set-budget",
        "db" => "delete-budget",
        "lb" => "budgets",
        "sum" => "summary",
        "bal" => "balance",
        "?" => "help",
        "bye" | "quit" | "q" => "exit",
        other => other,
    }
}

/// Parse one input line against the current local date.
pub fn parse_line(line: &str) -> TallyResult<Command> {
    parse_line_at(line, primitives::today())
}

/// Parse one input line with an explicit "today" (used directly by tests and
/// anything that needs a deterministic clock).
pub fn parse_line_at(line: &str, today: NaiveDate) -> TallyResult<Command> {
    let line = line.trim();
    let (keyword, args) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    };
    let keyword = keyword.to_ascii_lowercase();

    match canonical(&keyword) {
        "add-expense" => parse_add_expense(args, today),
        "add-income" => parse_add_income(args, today),
        "delete-expense" => {
            Ok(Command::DeleteExpense { index: parse_index_args(args)? })
        }
        "delete-income" => Ok(Command::DeleteIncome { index: parse_index_args(args)? }),
        "modify-expense" => parse_modify_expense(args, today),
        "modify-income" => parse_modify_income(args, today),
        "list-expenses" => Ok(Command::ListExpenses { month: parse_month_args(args)? }),
        "list-incomes" => Ok(Command::ListIncomes { month: parse_month_args(args)? }),
        "set-budget" => parse_set_budget(args),
        "delete-budget" => parse_delete_budget(args),
        "budgets" => bare(args, Command::ListBudgets),
        "summary" => bare(args, Command::Summary),
        "balance" => bare(args, Command::Balance),
        "export" => parse_export(args),
        "help" => bare(args, Command::Help),
        "exit" => bare(args, Command::Exit),
        other => Err(TallyError::UnknownCommand(other.to_string())),
    }
}

/// A command that takes no arguments
fn bare(args: &str, command: Command) -> TallyResult<Command> {
    let leftover = args.trim();
    if leftover.is_empty() {
        Ok(command)
    } else {
        Err(TallyError::TrailingText(leftover.to_string()))
    }
}

fn parse_add_expense(args: &str, today: NaiveDate) -> TallyResult<Command> {
    let fields = fields::scan(args, &ADD_SPEC)?;
    let mut record = Expense::new(
        parse_amount(fields.require(AMOUNT)?)?,
        fields.require(CATEGORY)?.parse()?,
        parse_date(fields.require(DATE)?, today, DatePolicy::RejectFuture)?,
    );
    record.note = fields.get(NOTE).map(str::to_string);
    Ok(Command::AddExpense(record))
}

fn parse_add_income(args: &str, today: NaiveDate) -> TallyResult<Command> {
    let fields = fields::scan(args, &ADD_SPEC)?;
    let mut record = Income::new(
        parse_amount(fields.require(AMOUNT)?)?,
        fields.require(CATEGORY)?.parse()?,
        parse_date(fields.require(DATE)?, today, DatePolicy::RejectFuture)?,
    );
    record.note = fields.get(NOTE).map(str::to_string);
    Ok(Command::AddIncome(record))
}

fn parse_index_args(args: &str) -> TallyResult<usize> {
    let fields = fields::scan(args, &DELETE_SPEC)?;
    parse_index(fields.require(INDEX)?)
}

fn parse_modify_expense(args: &str, today: NaiveDate) -> TallyResult<Command> {
    let fields = fields::scan(args, &MODIFY_SPEC)?;
    let index = parse_index(fields.require(INDEX)?)?;
    let patch = ExpensePatch {
        amount: fields.get(AMOUNT).map(parse_amount).transpose()?,
        category: fields.get(CATEGORY).map(str::parse).transpose()?,
        date: fields
            .get(DATE)
            .map(|t| parse_date(t, today, DatePolicy::RejectFuture))
            .transpose()?,
        note: fields.get(NOTE).map(str::to_string),
    };
    if patch.is_empty() {
        return Err(TallyError::MissingField("a/, c/, d/ or n/".into()));
    }
    Ok(Command::ModifyExpense { index, patch })
}

fn parse_modify_income(args: &str, today: NaiveDate) -> TallyResult<Command> {
    let fields = fields::scan(args, &MODIFY_SPEC)?;
    let index = parse_index(fields.require(INDEX)?)?;
    let patch = IncomePatch {
        amount: fields.get(AMOUNT).map(parse_amount).transpose()?,
        category: fields.get(CATEGORY).map(str::parse).transpose()?,
        date: fields
            .get(DATE)
            .map(|t| parse_date(t, today, DatePolicy::RejectFuture))
            .transpose()?,
        note: fields.get(NOTE).map(str::to_string),
    };
    if patch.is_empty() {
        return Err(TallyError::MissingField("a/, c/, d/ or n/".into()));
    }
    Ok(Command::ModifyIncome { index, patch })
}

fn parse_month_args(args: &str) -> TallyResult<Option<YearMonth>> {
    let fields = fields::scan(args, &LIST_SPEC)?;
    fields.get(MONTH).map(parse_month).transpose()
}

fn parse_set_budget(args: &str) -> TallyResult<Command> {
    let fields = fields::scan(args, &SET_BUDGET_SPEC)?;
    Ok(Command::SetBudget {
        category: fields.require(CATEGORY)?.parse()?,
        limit: parse_limit(fields.require(AMOUNT)?)?,
    })
}

fn parse_delete_budget(args: &str) -> TallyResult<Command> {
    let fields = fields::scan(args, &DELETE_BUDGET_SPEC)?;
    Ok(Command::DeleteBudget {
        category: fields.require(CATEGORY)?.parse()?,
    })
}

fn parse_export(args: &str) -> TallyResult<Command> {
    let fields = fields::scan(args, &EXPORT_SPEC)?;
    Ok(Command::Export {
        filename: parse_filename(fields.require(FILE)?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: fn() -> NaiveDate = || date(2025, 10, 15);

    #[test]
    fn test_field_order_does_not_change_the_record() {
        let orders = [
            "add-expense a/10 c/food d/2025-10-10",
            "add-expense c/food a/10 d/2025-10-10",
            "add-expense d/2025-10-10 c/food a/10",
        ];
        let expected = parse_line_at(orders[0], TODAY()).unwrap();
        for input in &orders[1..] {
            assert_eq!(parse_line_at(input, TODAY()).unwrap(), expected);
        }
        assert_eq!(
            expected,
            Command::AddExpense(Expense::new(
                10.0,
                ExpenseCategory::Food,
                date(2025, 10, 10)
            ))
        );
    }

    #[test]
    fn test_add_expense_with_note() {
        let cmd =
            parse_line_at("add-expense a/8.40 c/food d/2025-10-10 n/coffee and cake", TODAY())
                .unwrap();
        match cmd {
            Command::AddExpense(e) => {
                assert_eq!(e.amount, 8.4);
                assert_eq!(e.note.as_deref(), Some("coffee and cake"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_income() {
        let cmd = parse_line_at("add-income a/2500 c/salary d/2025-10-01", TODAY()).unwrap();
        assert_eq!(
            cmd,
            Command::AddIncome(Income::new(
                2500.0,
                IncomeCategory::Salary,
                date(2025, 10, 1)
            ))
        );
    }

    #[test]
    fn test_empty_category_value_is_missing_field() {
        let err = parse_line_at("add-expense a/10 c/ d/2025-10-10", TODAY()).unwrap_err();
        assert_eq!(err, TallyError::MissingField("c/".into()));
    }

    #[test]
    fn test_future_date_rejected_for_add_and_modify() {
        let err = parse_line_at("add-expense a/10 c/food d/2025-10-16", TODAY()).unwrap_err();
        assert_eq!(err, TallyError::FutureDate(date(2025, 10, 16)));

        let err = parse_line_at("modify-income i/1 d/2025-10-16", TODAY()).unwrap_err();
        assert_eq!(err, TallyError::FutureDate(date(2025, 10, 16)));
    }

    #[test]
    fn test_aliases_expand_and_are_idempotent() {
        assert_eq!(canonical("ae"), "add-expense");
        assert_eq!(canonical("add-expense"), "add-expense");
        assert_eq!(canonical(canonical("le")), "list-expenses");
        assert_eq!(canonical("bye"), "exit");

        let long = parse_line_at("add-expense a/10 c/food d/2025-10-10", TODAY()).unwrap();
        let short = parse_line_at("ae a/10 c/food d/2025-10-10", TODAY()).unwrap();
        assert_eq!(long, short);
    }

    #[test]
    fn test_delete_takes_an_index() {
        assert_eq!(
            parse_line_at("delete-expense i/2", TODAY()).unwrap(),
            Command::DeleteExpense { index: 2 }
        );
        assert_eq!(
            parse_line_at("de i/0", TODAY()).unwrap_err(),
            TallyError::IndexTooSmall("0".into())
        );
    }

    #[test]
    fn test_modify_needs_at_least_one_field() {
        let err = parse_line_at("modify-expense i/1", TODAY()).unwrap_err();
        assert_eq!(err, TallyError::MissingField("a/, c/, d/ or n/".into()));

        let cmd = parse_line_at("modify-expense i/1 a/15", TODAY()).unwrap();
        assert_eq!(
            cmd,
            Command::ModifyExpense {
                index: 1,
                patch: ExpensePatch {
                    amount: Some(15.0),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_list_month_filter_absent_and_present() {
        assert_eq!(
            parse_line_at("list-expenses", TODAY()).unwrap(),
            Command::ListExpenses { month: None }
        );
        assert_eq!(
            parse_line_at("list-expenses m/2025-09", TODAY()).unwrap(),
            Command::ListExpenses {
                month: Some(YearMonth::new(2025, 9))
            }
        );
        assert_eq!(
            parse_line_at("list-expenses m/september", TODAY()).unwrap_err(),
            TallyError::MalformedDate("september".into())
        );
    }

    #[test]
    fn test_set_budget_allows_zero_limit() {
        assert_eq!(
            parse_line_at("set-budget c/food a/0", TODAY()).unwrap(),
            Command::SetBudget {
                category: ExpenseCategory::Food,
                limit: 0.0
            }
        );
        assert_eq!(
            parse_line_at("sb c/food a/-5", TODAY()).unwrap_err(),
            TallyError::NegativeLimit("-5".into())
        );
    }

    #[test]
    fn test_bare_commands_reject_arguments() {
        assert_eq!(parse_line_at("balance", TODAY()).unwrap(), Command::Balance);
        assert_eq!(
            parse_line_at("balance now", TODAY()).unwrap_err(),
            TallyError::TrailingText("now".into())
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line_at("frobnicate a/1", TODAY()).unwrap_err(),
            TallyError::UnknownCommand("frobnicate".into())
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            parse_line_at("export f/october", TODAY()).unwrap(),
            Command::Export {
                filename: "october.csv".into()
            }
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            parse_line_at("Add-Expense a/10 c/food d/2025-10-10", TODAY()).unwrap(),
            parse_line_at("add-expense a/10 c/food d/2025-10-10", TODAY()).unwrap()
        );
    }
}
