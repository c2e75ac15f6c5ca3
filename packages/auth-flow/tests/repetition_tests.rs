//! Property tests: any number of calls, any mix of variants, same sequence
//! every time.

use auth_flow::{run_authentication, AuthMethod, AuthStep, ClientAppAuthentication, RecordingTap};
use proptest::prelude::*;

fn any_method() -> impl Strategy<Value = AuthMethod> {
    prop::sample::select(AuthMethod::ALL.to_vec())
}

proptest! {
    #[test]
    fn n_calls_yield_n_identical_sequences(method in any_method(), n in 1usize..32) {
        let process = method.process();
        let mut tap = RecordingTap::new();

        for _ in 0..n {
            run_authentication(&process, &mut tap);
        }

        prop_assert_eq!(tap.steps().len(), n * AuthStep::ORDER.len());
        for run in tap.runs() {
            prop_assert_eq!(run, &AuthStep::ORDER[..]);
        }
    }

    #[test]
    fn interleaved_variants_do_not_affect_each_other(
        methods in prop::collection::vec(any_method(), 1..16)
    ) {
        let mut tap = RecordingTap::new();

        for method in &methods {
            ClientAppAuthentication::authenticate_with_tap(method.process().as_ref(), &mut tap);
        }

        prop_assert_eq!(tap.runs().count(), methods.len());
        prop_assert!(tap.runs().all(|run| run == AuthStep::ORDER));
    }
}
