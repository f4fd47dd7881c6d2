//! Plain-text rendering of the page for the terminal.

use chipin_core::models::{Contribution, Payback};
use chipin_core::{aggregate, settle, PageState};
use std::fmt::Write;

pub fn render(state: &PageState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Greeting:   {}", state.greeting.message());
    let _ = writeln!(out, "Counter:    {}", state.counter.display());
    let _ = writeln!(out, "Selection:  {}", state.selection.message());

    let labels: Vec<&str> = state.list.entries.iter().map(|e| e.label.as_str()).collect();
    let _ = writeln!(out, "List:       [{}]", labels.join(", "));

    let chip_in = &state.chip_in;
    let _ = writeln!(
        out,
        "Chip-in:    {} contributions, total {}, equal share {}",
        chip_in.contributions.len(),
        chip_in.aggregate.total,
        chip_in.aggregate.equal_share
    );
    for c in &chip_in.contributions {
        let _ = writeln!(out, "  {} put in {}", c.name, c.amount);
    }
    push_paybacks(&mut out, &chip_in.paybacks);

    let _ = writeln!(
        out,
        "Timer:      {} ({})",
        state.timer.display(),
        if state.timer.running { "running" } else { "stopped" }
    );
    out
}

pub fn render_settlement(pool: &[Contribution]) -> String {
    let agg = aggregate(pool);
    let mut out = String::new();
    let _ = writeln!(out, "Total amount: {}", agg.total);
    let _ = writeln!(out, "Equal payment: {}", agg.equal_share);
    let paybacks = settle(pool);
    if paybacks.is_empty() {
        let _ = writeln!(out, "Nobody owes anything.");
    }
    push_paybacks(&mut out, &paybacks);
    out
}

fn push_paybacks(out: &mut String, paybacks: &[Payback]) {
    for p in paybacks {
        let mark = if p.settled { "x" } else { " " };
        let _ = writeln!(out, "  [{}] {}", mark, p.sentence());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipin_core::models::{ChipInEvent, CounterEvent, ListEvent, PageEvent};
    use chipin_core::{build_state, PageConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn render_lists_every_widget() {
        let events: Vec<PageEvent> = vec![
            CounterEvent::Increment.into(),
            ListEvent::Add.into(),
            ChipInEvent::Add { name: "A".into(), amount: 0.0 }.into(),
            ChipInEvent::Add { name: "B".into(), amount: 10.0 }.into(),
            ChipInEvent::Calculate.into(),
            ChipInEvent::Toggle { index: 0 }.into(),
        ];
        let state = build_state(&PageConfig::default(), &events);
        let expected = "\
Greeting:   Hello! Please enter your name...
Counter:    1
Selection:  You selected: Nothing
List:       [0]
Chip-in:    2 contributions, total 10, equal share 5
  A put in 0
  B put in 10
  [x] A should give 5 to B
Timer:      00:00 (stopped)
";
        assert_eq!(render(&state), expected);
    }

    #[test]
    fn settlement_report_for_balanced_pool() {
        let pool = vec![Contribution::new("A", 4.0), Contribution::new("B", 4.0)];
        assert_eq!(
            render_settlement(&pool),
            "Total amount: 8\nEqual payment: 4\nNobody owes anything.\n"
        );
    }
}
