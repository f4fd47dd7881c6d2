//! Command scripts: parsing into page events and waits.

use chipin_core::ids::EntryId;
use chipin_core::models::{
    ChipInEvent, CounterEvent, GreetingEvent, ListEvent, SelectionEvent, TimerEvent,
};
use chipin_core::script::{parse_script, script_events, ScriptStep};
use chipin_core::{build_state, CoreError, PageConfig};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn parses_every_command() {
    let source = r#"
        # a comment
        greet "Ada Lovelace"
        greet
        counter inc
        counter dec
        select 2
        list add
        list remove 0
        chipin add "Mary Ann" 12.5
        chipin add Bob lots
        chipin remove 1
        chipin calc
        chipin toggle 0
        timer start
        timer tick
        timer stop
        timer toggle
        timer reset
        wait 1500
    "#;
    let steps = parse_script(source).unwrap();
    let expected = vec![
        ScriptStep::Event(GreetingEvent::TextChanged("Ada Lovelace".into()).into()),
        ScriptStep::Event(GreetingEvent::TextChanged(String::new()).into()),
        ScriptStep::Event(CounterEvent::Increment.into()),
        ScriptStep::Event(CounterEvent::Decrement.into()),
        ScriptStep::Event(SelectionEvent::Changed(2).into()),
        ScriptStep::Event(ListEvent::Add.into()),
        ScriptStep::Event(ListEvent::Remove(EntryId(0)).into()),
        ScriptStep::Event(ChipInEvent::Add { name: "Mary Ann".into(), amount: 12.5 }.into()),
        ScriptStep::Event(ChipInEvent::Add { name: "Bob".into(), amount: 0.0 }.into()),
        ScriptStep::Event(ChipInEvent::Remove { index: 1 }.into()),
        ScriptStep::Event(ChipInEvent::Calculate.into()),
        ScriptStep::Event(ChipInEvent::Toggle { index: 0 }.into()),
        ScriptStep::Event(TimerEvent::Start.into()),
        ScriptStep::Event(TimerEvent::Tick.into()),
        ScriptStep::Event(TimerEvent::Stop.into()),
        ScriptStep::Event(TimerEvent::Toggle.into()),
        ScriptStep::Event(TimerEvent::Reset.into()),
        ScriptStep::Wait(Duration::from_millis(1500)),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn errors_name_the_line() {
    let err = parse_script("counter inc\n\nfrobnicate").unwrap_err();
    match err {
        CoreError::Script { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("frobnicate"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(parse_script("select x").is_err());
    assert!(parse_script("chipin remove -1").is_err());
    assert!(parse_script("list remove").is_err());
    assert!(parse_script("timer pause").is_err());
    assert!(parse_script("wait soon").is_err());
}

#[test]
fn script_drives_whole_page() {
    let source = r#"
        greet Bob
        counter inc
        counter inc
        counter dec
        select 0
        list add
        list add
        chipin add A 0
        chipin add B 0
        chipin add C 30
        chipin calc
        timer start
        timer tick
        timer tick
        timer stop
        timer tick
    "#;
    let steps = parse_script(source).unwrap();
    let state = build_state(&PageConfig::default(), &script_events(&steps));

    assert_eq!(state.greeting.message(), "Hello, Bob!");
    assert_eq!(state.counter.count, 1);
    assert_eq!(state.selection.selected_label(), "Audi");
    assert_eq!(state.list.entries.len(), 2);
    let sentences: Vec<String> = state.chip_in.paybacks.iter().map(|p| p.sentence()).collect();
    assert_eq!(sentences, vec!["A should give 10 to C", "B should give 10 to C"]);
    assert_eq!(state.timer.seconds, 2);
}
