//! Line-oriented record format of the data file.
//!
//! Every task takes exactly six lines:
//!
//! ```text
//! 1                 kind tag, 0 = plain, 1 = deadline
//! Write report      title
//! Quarterly numbers description
//! 3 0               priority rank and done flag
//! 1 3 2025          creation date, day month year
//! 10 3 2025         deadline, day month year
//! ```
//!
//! There is no header and no escaping, which is why titles and descriptions
//! must stay on one line. Reading stops quietly at the first record that
//! cannot be parsed; that record and everything after it are dropped.

use super::date::Date;
use super::error::Result;
use super::priority::Priority;
use super::task::{Task, TaskKind};
use std::io::{self, BufRead, Write};

/// Writes one task as a six line record.
pub fn write_task<W: Write>(out: &mut W, task: &Task) -> io::Result<()> {
    writeln!(out, "{}", task.kind().tag())?;
    writeln!(out, "{}", task.title())?;
    writeln!(out, "{}", task.description())?;
    writeln!(out, "{} {}", task.priority(), u8::from(task.is_done()))?;
    writeln!(out, "{}", task.created().to_record())?;
    writeln!(out, "{}", task.deadline().to_record())
}

pub fn write_tasks<'a, W, I>(out: &mut W, tasks: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    for task in tasks {
        write_task(out, task)?;
    }
    out.flush()
}

/// Outcome of reading one record.
enum Record {
    Task(Task),
    End,
    Malformed(&'static str),
}

/// Reads records until end of input or the first malformed one.
///
/// A line that is not valid UTF-8 counts as malformed, so the records before
/// it are kept. Only genuine I/O failures are returned as errors.
pub fn read_tasks<R: BufRead>(reader: R) -> Result<Vec<Task>> {
    let mut lines = reader.lines();
    let mut tasks = Vec::new();

    loop {
        let record = match read_record(&mut lines) {
            Ok(record) => record,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Record::Malformed("line is not valid UTF-8"),
            Err(err) => return Err(err.into()),
        };

        match record {
            Record::Task(task) => tasks.push(task),
            Record::End => break,
            Record::Malformed(reason) => {
                tracing::warn!(loaded = tasks.len(), reason, "stopped reading at a malformed record");
                break;
            }
        }
    }

    Ok(tasks)
}

fn read_record<I>(lines: &mut I) -> io::Result<Record>
where
    I: Iterator<Item = io::Result<String>>,
{
    // Blank lines between records are tolerated.
    let tag_line = loop {
        match next_line(lines)? {
            None => return Ok(Record::End),
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
        }
    };
    let Ok(tag) = tag_line.trim().parse::<i64>() else {
        return Ok(Record::Malformed("kind tag is not a number"));
    };

    let Some(title) = next_line(lines)? else {
        return Ok(Record::Malformed("missing title"));
    };
    let Some(description) = next_line(lines)? else {
        return Ok(Record::Malformed("missing description"));
    };

    let Some(status_line) = next_line(lines)? else {
        return Ok(Record::Malformed("missing priority and status"));
    };
    let Some((priority, done)) = parse_status(&status_line) else {
        return Ok(Record::Malformed("priority and status are not two numbers"));
    };

    let Some(created) = next_date(lines)? else {
        return Ok(Record::Malformed("bad creation date"));
    };
    let Some(deadline) = next_date(lines)? else {
        return Ok(Record::Malformed("bad deadline"));
    };

    Ok(Record::Task(Task::from_parts(
        TaskKind::from_tag(tag),
        &title,
        &description,
        priority,
        created,
        deadline,
        done,
    )))
}

fn next_line<I>(lines: &mut I) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        None => Ok(None),
        Some(line) => {
            let mut line = line?;
            if line.ends_with('\r') {
                line.pop();
            }
            Ok(Some(line))
        }
    }
}

fn next_date<I>(lines: &mut I) -> io::Result<Option<Date>>
where
    I: Iterator<Item = io::Result<String>>,
{
    Ok(next_line(lines)?.and_then(|line| line.parse::<Date>().ok()))
}

fn parse_status(line: &str) -> Option<(Priority, bool)> {
    let mut parts = line.split_whitespace();
    let rank = parts.next()?.parse::<i64>().ok()?;
    let done = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((Priority::new(rank), done != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Vec<Task> {
        let mut done = Task::from_parts(TaskKind::Deadline, "Pay rent", "Before the 5th", Priority::High, Date::new(1, 3, 2025), Date::new(5, 3, 2025), false);
        done.mark_done();
        vec![
            Task::from_parts(TaskKind::Plain, "Write report", "Quarterly numbers", Priority::Medium, Date::new(1, 3, 2025), Date::new(10, 3, 2025), false),
            done,
        ]
    }

    fn encode(tasks: &[Task]) -> String {
        let mut buf = Vec::new();
        write_tasks(&mut buf, tasks).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_layout() {
        let text = encode(&sample());
        assert_eq!(
            text,
            "0\nWrite report\nQuarterly numbers\n2 0\n1 3 2025\n10 3 2025\n\
             1\nPay rent\nBefore the 5th\n3 1\n1 3 2025\n5 3 2025\n"
        );
    }

    #[test]
    fn test_read_back_what_was_written() {
        let tasks = sample();
        let read = read_tasks(Cursor::new(encode(&tasks))).unwrap();
        assert_eq!(read, tasks);
    }

    #[test]
    fn test_empty_input_reads_nothing() {
        assert!(read_tasks(Cursor::new("")).unwrap().is_empty());
        assert!(read_tasks(Cursor::new("\n\n")).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_trailing_record_is_dropped() {
        let mut text = encode(&sample());
        text.push_str("0\nHalf a task\nno status line follows\n");
        let read = read_tasks(Cursor::new(text)).unwrap();
        assert_eq!(read.len(), 2);
    }

    #[test]
    fn test_malformed_record_stops_the_load() {
        let text = "0\nFirst\n\n1 0\n1 1 2025\n2 1 2025\n\
                    x\nSecond\n\n1 0\n1 1 2025\n2 1 2025\n\
                    0\nThird\n\n1 0\n1 1 2025\n2 1 2025\n";
        let read = read_tasks(Cursor::new(text)).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].title(), "First");
        assert_eq!(read[0].description(), "");
    }

    #[test]
    fn test_lenient_field_values() {
        // out of range priority, non-zero done flag, impossible date, legacy slashes, CRLF
        let text = "1\r\nLegacy\r\nFrom the old program\r\n7 5\r\n30/2/2023\r\n15/8/2025\r\n";
        let read = read_tasks(Cursor::new(text)).unwrap();
        assert_eq!(read.len(), 1);
        let task = &read[0];
        assert_eq!(task.kind(), TaskKind::Deadline);
        assert_eq!(task.title(), "Legacy");
        assert_eq!(task.priority(), Priority::Low);
        assert!(task.is_done());
        assert_eq!(task.created(), Date::default());
        assert_eq!(task.deadline(), Date::new(15, 8, 2025));
    }

    #[test]
    fn test_invalid_utf8_keeps_earlier_records() {
        let mut bytes = encode(&sample()).into_bytes();
        bytes.extend_from_slice(b"0\nCaf\xe9\n\n1 0\n1 1 2025\n2 1 2025\n");
        let read = read_tasks(Cursor::new(bytes)).unwrap();
        assert_eq!(read, sample());
    }

    #[test]
    fn test_read_errors_other_than_encoding_are_returned() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            }
        }
        let err = read_tasks(io::BufReader::new(Broken)).unwrap_err();
        assert!(matches!(err, crate::libs::error::TaskError::Io(_)));
    }

    #[test]
    fn test_garbage_date_line_is_malformed() {
        let text = "0\nTitle\nDesc\n1 0\nsoon\n2 1 2025\n";
        assert!(read_tasks(Cursor::new(text)).unwrap().is_empty());
    }
}
