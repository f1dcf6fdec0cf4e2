//! Synthetic employee roster.

use std::path::Path;

use chrono::{Datelike, Days, NaiveDate, Timelike};
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};

use crate::error::Result;
use crate::model::{CellValue, Dataset};

/// Roster column names.
pub const ROSTER_HEADER: [&str; 5] = ["id", "name", "department", "salary", "hire_date"];

/// Departments employees are drawn from.
pub const DEPARTMENTS: [&str; 4] = ["Engineering", "Marketing", "Finance", "Human Resources"];

const SURNAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡", "郭",
    "何", "林", "罗", "高",
];

const GIVEN_NAMES: &[&str] = &[
    "伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "军", "洋", "勇", "艳", "杰", "娟",
    "涛", "明", "超", "秀兰", "霞", "平", "刚", "桂英", "建华", "志强", "文",
];

/// Lowest generated salary.
const SALARY_MIN: f64 = 8000.0;

/// Upper bound (exclusive) of generated salaries.
const SALARY_MAX: f64 = 25000.0;

/// Hire dates fall within this many days before the reference date.
const HIRE_WINDOW_DAYS: u64 = 5 * 365 + 1;

/// First employee number; row `i` gets `EMP{ID_BASE + i}`.
const ID_BASE: usize = 1000;

/// Build a roster dataset with `rows` random employees.
///
/// Hire dates are drawn from the five years up to `today`.
pub fn generate_roster<R: Rng>(rows: usize, today: NaiveDate, rng: &mut R) -> Dataset {
    let mut dataset = Dataset::new(ROSTER_HEADER);
    for i in 1..=rows {
        dataset.push_row(vec![
            CellValue::text(format!("EMP{}", ID_BASE + i)),
            CellValue::text(random_name(rng)),
            CellValue::text(*DEPARTMENTS.choose(rng).unwrap_or(&DEPARTMENTS[0])),
            CellValue::Float(round2(rng.random_range(SALARY_MIN..SALARY_MAX))),
            CellValue::Date(random_hire_date(today, rng)),
        ]);
    }
    dataset
}

fn random_name<R: Rng>(rng: &mut R) -> String {
    let surname = SURNAMES.choose(rng).copied().unwrap_or("王");
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("伟");
    format!("{}{}", surname, given)
}

fn random_hire_date<R: Rng>(today: NaiveDate, rng: &mut R) -> NaiveDate {
    let back = rng.random_range(0..HIRE_WINDOW_DAYS);
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Write a dataset to a single-sheet workbook with a bold header row.
pub fn write_roster<P: AsRef<Path>>(dataset: &Dataset, sheet_name: &str, path: P) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let bold = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (col, name) in dataset.header().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &bold)?;
        worksheet.set_column_width(col as u16, 16)?;
    }

    for (i, row) in dataset.rows.iter().enumerate() {
        let row_num = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                CellValue::Int(v) => {
                    worksheet.write_number(row_num, col, *v as f64)?;
                }
                CellValue::Float(v) => {
                    worksheet.write_number(row_num, col, *v)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                CellValue::Date(d) => {
                    write_date(worksheet, row_num, col, excel_date(*d)?, &date_format)?;
                }
                CellValue::DateTime(dt) => {
                    let value = excel_date(dt.date())?.and_hms(
                        dt.hour() as u16,
                        dt.minute() as u8,
                        dt.second(),
                    )?;
                    write_date(worksheet, row_num, col, value, &datetime_format)?;
                }
            }
        }
    }

    workbook.save(path.as_ref())?;
    log::info!(
        "Wrote {} roster rows to {}",
        dataset.row_count(),
        path.as_ref().display()
    );
    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime> {
    Ok(ExcelDateTime::from_ymd(
        date.year() as u16,
        date.month() as u8,
        date.day() as u8,
    )?)
}

fn write_date(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: ExcelDateTime,
    format: &Format,
) -> Result<()> {
    worksheet.write_datetime_with_format(row, col, &value, format)?;
    Ok(())
}
