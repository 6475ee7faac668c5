//! Integration tests for the background session runner
//!
//! Uses a fast tick period so the tests complete quickly; the production
//! period is one second.

use std::thread;
use std::time::Duration;

use patient_simulator_core::{hyperkalemia, Session, SessionRunner};

fn session() -> Session {
    Session::new(hyperkalemia::scenario()).expect("scenario must validate")
}

#[test]
fn test_runner_ticks_the_session() {
    let mut runner = SessionRunner::with_period(session(), Duration::from_millis(2));
    let handle = runner.session();

    thread::sleep(Duration::from_millis(100));
    runner.stop();

    let elapsed = handle.lock().unwrap().engine().elapsed_seconds();
    assert!(elapsed > 0, "runner never ticked");
}

#[test]
fn test_stop_freezes_the_session() {
    let mut runner = SessionRunner::with_period(session(), Duration::from_millis(2));
    let handle = runner.session();

    thread::sleep(Duration::from_millis(20));
    runner.stop();

    let frozen = handle.lock().unwrap().engine().elapsed_seconds();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(handle.lock().unwrap().engine().elapsed_seconds(), frozen);
}

#[test]
fn test_actions_execute_under_the_running_lock() {
    let mut runner = SessionRunner::with_period(session(), Duration::from_millis(2));
    let handle = runner.session();

    {
        let mut session = handle.lock().unwrap();
        session.execute_action("proc_iv_access", None).unwrap();
        session.execute_action("drug_calcium", None).unwrap();
    }
    thread::sleep(Duration::from_millis(20));
    runner.stop();

    let session = handle.lock().unwrap();
    assert!(session.status().has_iv_access);
    // Stability may have started decaying if the sleep ran long; it must
    // still be in shielded territory
    assert!(session.engine().physiology().membrane_stability > 50);
    assert_eq!(session.time_elapsed(), 12);
}

#[test]
fn test_independent_sessions_do_not_share_state() {
    let mut first = SessionRunner::with_period(session(), Duration::from_millis(2));
    let mut second = SessionRunner::with_period(session(), Duration::from_millis(2));

    {
        let handle = first.session();
        let mut session = handle.lock().unwrap();
        session.execute_action("proc_iv_access", None).unwrap();
        session.execute_action("drug_calcium", None).unwrap();
    }
    thread::sleep(Duration::from_millis(20));
    first.stop();
    second.stop();

    let first_session = first.session();
    let second_session = second.session();
    let first_session = first_session.lock().unwrap();
    let second_session = second_session.lock().unwrap();

    assert_ne!(first_session.id(), second_session.id());
    assert!(first_session.engine().physiology().membrane_stability > 50);
    assert_eq!(second_session.engine().physiology().membrane_stability, 0);
    assert_eq!(second_session.time_elapsed(), 0);
}

#[test]
fn test_drop_stops_the_tick_thread() {
    let handle = {
        let runner = SessionRunner::with_period(session(), Duration::from_millis(2));
        let handle = runner.session();
        thread::sleep(Duration::from_millis(20));
        handle
    };

    let frozen = handle.lock().unwrap().engine().elapsed_seconds();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(handle.lock().unwrap().engine().elapsed_seconds(), frozen);
}
