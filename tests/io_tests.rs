//! Behaviour tests for the IO monad.
//!
//! Side effects must be deferred until the IO is forced, must run at most
//! once, and must run in the order they were bound.

use deferred_io::eff;
use deferred_io::effect::{IO, Unit};
use deferred_io::runtime::{Console, ConsoleError, ScriptedConsole};
use rstest::{fixture, rstest};
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

fn counting(counter: &Rc<Cell<usize>>, value: i32) -> IO<i32> {
    let counter = Rc::clone(counter);
    IO::new(move || {
        counter.set(counter.get() + 1);
        value
    })
}

#[fixture]
fn counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

// =============================================================================
// Laziness
// =============================================================================

mod laziness {
    use super::*;

    #[rstest]
    fn new_is_lazy(counter: Rc<Cell<usize>>) {
        let io = counting(&counter, 42);
        assert_eq!(counter.get(), 0, "IO should not execute on creation");

        assert_eq!(io.run_unsafe(), 42);
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn fmap_is_lazy(counter: Rc<Cell<usize>>) {
        let io = counting(&counter, 21).fmap(|x| x * 2);
        assert_eq!(counter.get(), 0, "IO should not execute after fmap");

        assert_eq!(io.run_unsafe(), 42);
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn flat_map_is_lazy(counter: Rc<Cell<usize>>) {
        let inner = Rc::clone(&counter);
        let io = counting(&counter, 10).flat_map(move |x| counting(&inner, x * 2));
        assert_eq!(counter.get(), 0, "neither IO should execute after flat_map");

        assert_eq!(io.run_unsafe(), 20);
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn flat_map_with_is_lazy(counter: Rc<Cell<usize>>) {
        let inner = Rc::clone(&counter);
        let io = counting(&counter, 3).flat_map_with(move |x| counting(&inner, *x + 1), |x, y| x * y);
        assert_eq!(counter.get(), 0);

        assert_eq!(io.run_unsafe(), 12);
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn eff_block_is_lazy(counter: Rc<Cell<usize>>) {
        let first = Rc::clone(&counter);
        let second = Rc::clone(&counter);
        let io = eff! {
            x <= counting(&first, 1);
            y <= counting(&second, 2);
            yield x + y
        };
        assert_eq!(counter.get(), 0);

        assert_eq!(io.run_unsafe(), 3);
        assert_eq!(counter.get(), 2);
    }
}

// =============================================================================
// Memoization
// =============================================================================

mod memoization {
    use super::*;

    #[rstest]
    fn force_twice_runs_once(counter: Rc<Cell<usize>>) {
        let io = counting(&counter, 5);

        let first = *io.force();
        let second = *io.force();

        assert_eq!(first, second);
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn composed_force_twice_runs_every_step_once(counter: Rc<Cell<usize>>) {
        let inner = Rc::clone(&counter);
        let io = counting(&counter, 1)
            .flat_map(move |x| counting(&inner, x + 1))
            .fmap(|x| x * 10);

        assert_eq!(*io.force(), 20);
        assert_eq!(*io.force(), 20);
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn force_returns_the_same_cached_value() {
        let io = IO::new(|| String::from("cached"));

        let first: *const String = &*io.force();
        let second: *const String = &*io.force();

        assert_eq!(first, second);
    }

    #[rstest]
    fn pure_is_already_forced() {
        let io = IO::pure(1);
        assert!(io.is_forced());
    }
}

// =============================================================================
// Ordering
// =============================================================================

mod ordering {
    use super::*;

    fn write(console: &ScriptedConsole, text: &str) -> IO<Result<Unit, ConsoleError>> {
        console.write_line(text.to_string())
    }

    #[rstest]
    fn three_writes_left_nested() {
        let console = ScriptedConsole::default();
        let (second, third) = (console.clone(), console.clone());

        let io = write(&console, "one")
            .flat_map_ok(move |Unit| write(&second, "two"))
            .flat_map_ok(move |Unit| write(&third, "three"));
        assert!(console.output().is_empty());

        assert!(io.run_unsafe().is_ok());
        assert_eq!(console.output(), vec!["one", "two", "three"]);
    }

    #[rstest]
    fn three_writes_right_nested() {
        let console = ScriptedConsole::default();
        let (second, third) = (console.clone(), console.clone());

        let io = write(&console, "one").flat_map_ok(move |Unit| {
            write(&second, "two").flat_map_ok(move |Unit| write(&third, "three"))
        });
        assert!(console.output().is_empty());

        assert!(io.run_unsafe().is_ok());
        assert_eq!(console.output(), vec!["one", "two", "three"]);
    }

    #[rstest]
    fn three_writes_with_then() {
        let console = ScriptedConsole::default();

        let io = write(&console, "one")
            .then(write(&console, "two"))
            .then(write(&console, "three"));

        let _ = io.run_unsafe();
        assert_eq!(console.output(), vec!["one", "two", "three"]);
    }
}

// =============================================================================
// Faults
// =============================================================================

mod faults {
    use super::*;

    #[rstest]
    fn panic_propagates_out_of_force_and_poisons() {
        let io = IO::new(|| -> i32 { panic!("producer failed") });

        let first = catch_unwind(AssertUnwindSafe(|| *io.force()));
        let second = catch_unwind(AssertUnwindSafe(|| *io.force()));

        assert!(first.is_err());
        assert!(second.is_err());
    }

    #[rstest]
    fn panic_stops_later_steps(counter: Rc<Cell<usize>>) {
        let later = Rc::clone(&counter);
        let io = IO::new(|| -> i32 { panic!("first step failed") })
            .flat_map(move |x| counting(&later, x));

        let outcome = catch_unwind(AssertUnwindSafe(|| io.run_unsafe()));

        assert!(outcome.is_err());
        assert_eq!(counter.get(), 0);
    }

    #[rstest]
    fn recover_turns_panic_into_value() {
        let io = IO::recover(
            IO::new(|| -> String { panic!("disk on fire") }),
            |message| format!("recovered: {message}"),
        );

        assert_eq!(io.run_unsafe(), "recovered: disk on fire");
    }
}
