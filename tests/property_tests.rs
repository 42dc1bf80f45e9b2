//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to drive random operation sequences and check
//! the engine against a plain reference model of current state, history
//! and redo slot.

use proptest::prelude::*;
use rewind::{fsm_config, Config, Fsm, FsmError, StateId};

const STATES: [&str; 4] = ["draft", "review", "published", "archived"];
const EVENTS: [&str; 5] = ["submit", "approve", "reject", "archive", "restore"];

fn config() -> Config {
    fsm_config! {
        initial: draft,
        draft { submit => review },
        review { approve => published, reject => draft },
        published { archive => archived },
        archived { restore => draft },
    }
}

#[derive(Clone, Debug)]
enum Op {
    Trigger(&'static str),
    Change(&'static str),
    Reset,
    Undo,
    Redo,
    ClearHistory,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len() + 1) -> &'static str {
        // one past the end yields an undeclared name
        STATES.get(index).copied().unwrap_or("deleted")
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop::sample::select(EVENTS.to_vec()).prop_map(Op::Trigger),
        2 => arbitrary_state().prop_map(Op::Change),
        1 => Just(Op::Reset),
        3 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::ClearHistory),
    ]
}

/// Reference behavior written directly from the rules.
struct Model {
    config: Config,
    current: String,
    history: Vec<String>,
    undone: Option<String>,
}

impl Model {
    fn new(config: Config) -> Self {
        let initial = config.initial.to_string();
        Self {
            config,
            current: initial.clone(),
            history: vec![initial],
            undone: None,
        }
    }

    fn apply(&mut self, op: &Op) -> Result<bool, ()> {
        match op {
            Op::Trigger(event) => match self.config.target(&self.current, event) {
                Some(target) => {
                    self.current = target.to_string();
                    self.history.push(self.current.clone());
                    Ok(true)
                }
                None => Err(()),
            },
            Op::Change(state) => {
                if self.config.contains(state) {
                    self.current = state.to_string();
                    self.history.push(self.current.clone());
                    Ok(true)
                } else {
                    Err(())
                }
            }
            Op::Reset => {
                self.current = self.config.initial.to_string();
                Ok(true)
            }
            Op::Undo => {
                if self.history.len() > 1 {
                    self.undone = self.history.pop();
                    self.current = self.history[self.history.len() - 1].clone();
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Op::Redo => match self.undone.clone().filter(|state| !state.is_empty()) {
                Some(state) => {
                    self.current = state;
                    self.history.push(self.current.clone());
                    Ok(true)
                }
                None => Ok(false),
            },
            Op::ClearHistory => {
                self.history = vec![self.config.initial.to_string()];
                Ok(true)
            }
        }
    }
}

fn apply(fsm: &mut Fsm, op: &Op) -> Result<bool, FsmError> {
    match op {
        Op::Trigger(event) => fsm.trigger(event).map(|_| true),
        Op::Change(state) => fsm.change_state(state).map(|_| true),
        Op::Reset => {
            fsm.reset();
            Ok(true)
        }
        Op::Undo => Ok(fsm.undo()),
        Op::Redo => Ok(fsm.redo()),
        Op::ClearHistory => {
            fsm.clear_history();
            Ok(true)
        }
    }
}

fn path(fsm: &Fsm) -> Vec<String> {
    fsm.history().path().into_iter().map(StateId::to_string).collect()
}

proptest! {
    #[test]
    fn empty_undone_state_is_not_redone(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let config = config().with_state("", rewind::StateDefinition::new());
        let mut fsm = Fsm::new(config.clone()).unwrap();
        let mut model = Model::new(config);

        for op in ops.iter().chain([Op::Change(""), Op::Undo, Op::Redo].iter()) {
            let expected = model.apply(op);
            let actual = apply(&mut fsm, op);

            prop_assert_eq!(actual.is_ok(), expected.is_ok(), "outcome differs for {:?}", op);
            prop_assert_eq!(fsm.current_state().as_str(), model.current.as_str());
            prop_assert_eq!(path(&fsm), model.history.clone());
        }
        prop_assert!(!fsm.can_redo());
    }

    #[test]
    fn engine_matches_reference_model(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut fsm = Fsm::new(config()).unwrap();
        let mut model = Model::new(config());

        for op in &ops {
            let expected = model.apply(op);
            let actual = apply(&mut fsm, op);

            prop_assert_eq!(actual.is_ok(), expected.is_ok(), "outcome differs for {:?}", op);
            if let (Ok(actual), Ok(expected)) = (actual, expected) {
                prop_assert_eq!(actual, expected, "return value differs for {:?}", op);
            }
            prop_assert_eq!(fsm.current_state().as_str(), model.current.as_str());
            prop_assert_eq!(path(&fsm), model.history.clone());
        }
    }

    #[test]
    fn history_is_never_empty(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut fsm = Fsm::new(config()).unwrap();

        for op in &ops {
            let _ = apply(&mut fsm, op);
            prop_assert!(!fsm.history().is_empty());
            prop_assert_eq!(fsm.history().path()[0].as_str(), "draft");
        }
    }

    #[test]
    fn failed_operations_change_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in prop::sample::select(EVENTS.to_vec()),
    ) {
        let mut fsm = Fsm::new(config()).unwrap();
        for op in &ops {
            let _ = apply(&mut fsm, op);
        }

        let before_state = fsm.current_state().clone();
        let before_path = path(&fsm);

        if fsm.trigger(event).is_err() {
            prop_assert_eq!(fsm.current_state(), &before_state);
            prop_assert_eq!(path(&fsm), before_path.clone());
        }

        let before_state = fsm.current_state().clone();
        let before_path = path(&fsm);
        prop_assert!(fsm.change_state("deleted").is_err());
        prop_assert_eq!(fsm.current_state(), &before_state);
        prop_assert_eq!(path(&fsm), before_path);
    }

    #[test]
    fn change_state_to_declared_state_always_succeeds(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in prop::sample::select(STATES.to_vec()),
    ) {
        let mut fsm = Fsm::new(config()).unwrap();
        for op in &ops {
            let _ = apply(&mut fsm, op);
        }
        let len = fsm.history().len();

        prop_assert!(fsm.change_state(target).is_ok());
        prop_assert_eq!(fsm.current_state().as_str(), target);
        prop_assert_eq!(fsm.history().len(), len + 1);
        prop_assert_eq!(fsm.history().last().as_str(), target);
    }

    #[test]
    fn reset_never_touches_history(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut fsm = Fsm::new(config()).unwrap();
        for op in &ops {
            let _ = apply(&mut fsm, op);
        }
        let before = path(&fsm);

        fsm.reset();

        prop_assert_eq!(fsm.current_state().as_str(), "draft");
        prop_assert_eq!(path(&fsm), before);
    }

    #[test]
    fn clear_history_keeps_only_initial(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut fsm = Fsm::new(config()).unwrap();
        for op in &ops {
            let _ = apply(&mut fsm, op);
        }
        let current = fsm.current_state().clone();

        fsm.clear_history();

        prop_assert_eq!(path(&fsm), vec!["draft".to_string()]);
        prop_assert_eq!(fsm.current_state(), &current);
    }

    #[test]
    fn redo_after_undo_is_repeatable(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        repeats in 1usize..5,
    ) {
        let mut fsm = Fsm::new(config()).unwrap();
        for op in &ops {
            let _ = apply(&mut fsm, op);
        }
        prop_assume!(fsm.can_undo());

        let undone = fsm.history().last().clone();
        prop_assert!(fsm.undo());
        let len = fsm.history().len();

        for i in 1..=repeats {
            prop_assert!(fsm.redo());
            prop_assert_eq!(fsm.current_state(), &undone);
            prop_assert_eq!(fsm.history().len(), len + i);
        }
    }

    #[test]
    fn states_for_event_is_subset_in_order(event in prop::sample::select(EVENTS.to_vec())) {
        let fsm = Fsm::new(config()).unwrap();

        let all = fsm.states(None);
        let filtered = fsm.states(Some(event));

        let expected: Vec<&StateId> = all
            .iter()
            .copied()
            .filter(|state| fsm.config().target(state.as_str(), event).is_some())
            .collect();
        prop_assert_eq!(filtered, expected);
    }
}

#[test]
fn states_lists_every_declared_state_once() {
    let fsm = Fsm::new(config()).unwrap();
    assert_eq!(fsm.states(None), STATES.to_vec());
}
