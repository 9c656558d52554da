use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use tinct_solver::termination::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the process receives SIGINT or SIGTERM.
///
/// The search then stops at the next decision and the solver reports `unknown` instead of being
/// killed halfway through writing its output.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Registers the signal handlers.
    pub(crate) fn install() -> std::io::Result<OsSignal> {
        const TERMINATION_SIGNALS: &[std::ffi::c_int] =
            &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

        let signal_received = Arc::new(AtomicBool::new(false));
        for &signal in TERMINATION_SIGNALS {
            let _ = signal_hook::flag::register(signal, Arc::clone(&signal_received))?;
        }

        Ok(OsSignal { signal_received })
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
