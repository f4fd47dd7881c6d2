//! Text command scripts for driving the page without a browser.
//!
//! Commands: greet ["text"], counter inc|dec, select <index>, list add,
//!   list remove <id>, chipin add "Name" <amount>, chipin remove <index>,
//!   chipin calc, chipin toggle <index>, timer start|stop|toggle|reset|tick,
//!   wait <ms>
//! Empty lines and # comments are skipped.

use crate::error::CoreError;
use crate::ids::EntryId;
use crate::models::{
    parse_amount, ChipInEvent, CounterEvent, GreetingEvent, ListEvent, PageEvent, SelectionEvent,
    TimerEvent,
};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    Event(PageEvent),
    /// Let wall time pass; only the elapsed timer cares.
    Wait(Duration),
}

/// Split on spaces, keeping double-quoted runs together. `""` is an empty argument.
fn parse_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            quoted = true;
        } else if c.is_whitespace() && !in_quotes {
            if !buf.is_empty() || quoted {
                args.push(std::mem::take(&mut buf));
            }
            quoted = false;
        } else {
            buf.push(c);
        }
    }
    if !buf.is_empty() || quoted {
        args.push(buf);
    }
    args
}

/// Parse a whole script. Line numbers in errors are 1-based.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, CoreError> {
    let mut steps = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        steps.push(parse_command(i + 1, line)?);
    }
    Ok(steps)
}

/// Only the events of a script, waits dropped.
pub fn script_events(steps: &[ScriptStep]) -> Vec<PageEvent> {
    steps
        .iter()
        .filter_map(|s| match s {
            ScriptStep::Event(e) => Some(e.clone()),
            ScriptStep::Wait(_) => None,
        })
        .collect()
}

pub fn parse_command(line: usize, command: &str) -> Result<ScriptStep, CoreError> {
    let args = parse_args(command);
    let Some(action) = args.first() else {
        return Err(CoreError::script(line, "empty command"));
    };
    let rest: Vec<&str> = args[1..].iter().map(String::as_str).collect();

    let event: PageEvent = match action.to_lowercase().as_str() {
        "greet" => GreetingEvent::TextChanged(rest.join(" ")).into(),
        "counter" => match sub(line, &rest, "counter")?.as_str() {
            "inc" | "increment" => CounterEvent::Increment.into(),
            "dec" | "decrement" => CounterEvent::Decrement.into(),
            other => return Err(CoreError::script(line, format!("unknown counter action: {}", other))),
        },
        "select" => {
            let index = arg(line, &rest, 0, "select index")?;
            let index = index
                .parse::<i64>()
                .map_err(|_| CoreError::script(line, format!("select index is not a number: {}", index)))?;
            SelectionEvent::Changed(index).into()
        }
        "list" => match sub(line, &rest, "list")?.as_str() {
            "add" => ListEvent::Add.into(),
            "remove" => {
                let id = arg(line, &rest, 1, "list entry id")?
                    .parse::<EntryId>()
                    .map_err(|e| CoreError::script(line, e))?;
                ListEvent::Remove(id).into()
            }
            other => return Err(CoreError::script(line, format!("unknown list action: {}", other))),
        },
        "chipin" => match sub(line, &rest, "chipin")?.as_str() {
            "add" => {
                let name = arg(line, &rest, 1, "contributor name")?.to_string();
                let amount = rest.get(2).map(|a| parse_amount(a)).unwrap_or(0.0);
                ChipInEvent::Add { name, amount }.into()
            }
            "remove" => ChipInEvent::Remove {
                index: index_arg(line, &rest, "chipin remove")?,
            }
            .into(),
            "calc" | "calculate" => ChipInEvent::Calculate.into(),
            "toggle" => ChipInEvent::Toggle {
                index: index_arg(line, &rest, "chipin toggle")?,
            }
            .into(),
            other => return Err(CoreError::script(line, format!("unknown chipin action: {}", other))),
        },
        "timer" => match sub(line, &rest, "timer")?.as_str() {
            "start" => TimerEvent::Start.into(),
            "stop" => TimerEvent::Stop.into(),
            "toggle" => TimerEvent::Toggle.into(),
            "reset" => TimerEvent::Reset.into(),
            "tick" => TimerEvent::Tick.into(),
            other => return Err(CoreError::script(line, format!("unknown timer action: {}", other))),
        },
        "wait" => {
            let ms = arg(line, &rest, 0, "wait milliseconds")?;
            let ms = ms
                .parse::<u64>()
                .map_err(|_| CoreError::script(line, format!("wait is not a number of ms: {}", ms)))?;
            return Ok(ScriptStep::Wait(Duration::from_millis(ms)));
        }
        other => return Err(CoreError::script(line, format!("unknown action: {}", other))),
    };
    Ok(ScriptStep::Event(event))
}

fn arg<'a>(line: usize, rest: &[&'a str], pos: usize, what: &str) -> Result<&'a str, CoreError> {
    rest.get(pos)
        .copied()
        .ok_or_else(|| CoreError::script(line, format!("missing {}", what)))
}

fn sub(line: usize, rest: &[&str], widget: &str) -> Result<String, CoreError> {
    arg(line, rest, 0, &format!("{} action", widget)).map(str::to_lowercase)
}

fn index_arg(line: usize, rest: &[&str], what: &str) -> Result<usize, CoreError> {
    let raw = arg(line, rest, 1, &format!("{} index", what))?;
    raw.parse::<usize>()
        .map_err(|_| CoreError::script(line, format!("{} index is not a position: {}", what, raw)))
}
