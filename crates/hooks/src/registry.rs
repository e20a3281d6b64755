//! Registry that dispatches after-calculation hooks.

use sheetlink_calc::{CalculationRequest, CalculationResponse};

use crate::hook::AfterCalculation;
use crate::response::ActionableResponse;

/// Ordered collection of hooks, executed in registration order.
///
/// The first failure stops the chain and is returned to the host as-is;
/// hooks registered after it do not run.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn AfterCalculation>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn AfterCalculation>) {
        self.hooks.push(hook);
    }

    /// Registered hook names, in execution order.
    pub fn names(&self) -> Vec<String> {
        self.hooks.iter().map(|h| h.name().to_string()).collect()
    }

    /// Run every registered hook against the completed calculation.
    pub fn run_after_calculation(
        &self,
        request: &CalculationRequest,
        response: &mut CalculationResponse,
    ) -> ActionableResponse {
        for hook in &self.hooks {
            let result = hook.after_calculation(request, response);
            if !result.success {
                return result;
            }
        }
        ActionableResponse::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedHook {
        name: &'static str,
        result: ActionableResponse,
        calls: Arc<AtomicUsize>,
    }

    impl AfterCalculation for FixedHook {
        fn name(&self) -> &str {
            self.name
        }

        fn after_calculation(
            &self,
            _request: &CalculationRequest,
            _response: &mut CalculationResponse,
        ) -> ActionableResponse {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn fixed(
        name: &'static str,
        result: ActionableResponse,
    ) -> (Box<FixedHook>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let hook = Box::new(FixedHook {
            name,
            result,
            calls: calls.clone(),
        });
        (hook, calls)
    }

    #[test]
    fn test_empty_registry_succeeds() {
        let registry = HookRegistry::new();
        let request = CalculationRequest::default();
        let mut response = CalculationResponse::default();

        let result = registry.run_after_calculation(&request, &mut response);
        assert!(result.success);
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let mut registry = HookRegistry::new();
        let (a, _) = fixed("a", ActionableResponse::ok());
        let (b, _) = fixed("b", ActionableResponse::ok());
        registry.register(a);
        registry.register(b);

        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_first_failure_stops_the_chain() {
        let mut registry = HookRegistry::new();
        let (a, a_calls) = fixed("a", ActionableResponse::failure("a failed"));
        let (b, b_calls) = fixed("b", ActionableResponse::ok());
        registry.register(a);
        registry.register(b);

        let request = CalculationRequest::default();
        let mut response = CalculationResponse::default();
        let result = registry.run_after_calculation(&request, &mut response);

        assert!(!result.success);
        assert_eq!(result.response_messages[0].message, "a failed");
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_success_collapses_to_ok() {
        let mut registry = HookRegistry::new();
        let (a, _) = fixed("a", ActionableResponse::ok());
        registry.register(a);

        let request = CalculationRequest::default();
        let mut response = CalculationResponse::default();
        let result = registry.run_after_calculation(&request, &mut response);

        assert!(result.success);
        assert!(result.response_messages.is_empty());
    }
}
