use std::time::{Duration, Instant};

use super::{BurnSequence, BurnStep, CLEAR_AFTER, FINISH_AFTER, RESET_AFTER};

#[test]
fn steps_are_not_due_early() {
    let start = Instant::now();
    let mut sequence = BurnSequence::start(start);
    assert_eq!(sequence.poll(start), None);
    assert_eq!(
        sequence.poll(start + CLEAR_AFTER - Duration::from_millis(1)),
        None
    );
    assert_eq!(sequence.next_deadline(), Some(start + CLEAR_AFTER));
}

#[test]
fn steps_fire_in_schedule_order() {
    let start = Instant::now();
    let mut sequence = BurnSequence::start(start);

    assert_eq!(sequence.poll(start + CLEAR_AFTER), Some(BurnStep::ClearBuffer));
    assert_eq!(sequence.poll(start + CLEAR_AFTER), None);
    assert_eq!(sequence.next_deadline(), Some(start + FINISH_AFTER));

    assert_eq!(sequence.poll(start + FINISH_AFTER), Some(BurnStep::Finish));
    assert_eq!(sequence.poll(start + RESET_AFTER), Some(BurnStep::Reset));
    assert_eq!(sequence.next_deadline(), None);
    assert_eq!(sequence.poll(start + RESET_AFTER * 2), None);
}

#[test]
fn late_poll_still_yields_every_step() {
    let start = Instant::now();
    let mut sequence = BurnSequence::start(start);
    let late = start + Duration::from_secs(30);

    let mut steps = Vec::new();
    while let Some(step) = sequence.poll(late) {
        steps.push(step);
    }
    assert_eq!(
        steps,
        vec![BurnStep::ClearBuffer, BurnStep::Finish, BurnStep::Reset]
    );
}
