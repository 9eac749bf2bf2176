#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::super::*;
    use crate::config::CalculatorConfig;
    use calculator_sdk::{Chain, ChainStepInput, FirstStep, Operator};
    use tracing_test::traced_test;

    fn create_test_service() -> service::Service {
        service::Service::new(&CalculatorConfig::default())
    }

    #[test]
    fn test_calculate_all_operators() {
        let service = create_test_service();

        assert_eq!(service.calculate(10.0, 5.0, "+").unwrap(), 15.0);
        assert_eq!(service.calculate(10.0, 5.0, "-").unwrap(), 5.0);
        assert_eq!(service.calculate(10.0, 5.0, "*").unwrap(), 50.0);
        assert_eq!(service.calculate(10.0, 5.0, "/").unwrap(), 2.0);

        let history = service.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[2].operator, Operator::Multiply);
        assert_eq!(history[2].result, 50.0);
    }

    #[test]
    fn test_calculate_records_operands_and_result() {
        let service = create_test_service();
        service.calculate(5.5, 2.5, "+").unwrap();

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].num1, 5.5);
        assert_eq!(history[0].num2, 2.5);
        assert_eq!(history[0].operator, Operator::Add);
        assert_eq!(history[0].result, 8.0);
    }

    #[test]
    fn test_division_by_zero_is_not_recorded() {
        let service = create_test_service();

        let err = service.calculate(10.0, 0.0, "/").unwrap_err();

        assert_eq!(err, error::DomainError::DivisionByZero);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_unsupported_operator() {
        let service = create_test_service();

        let err = service.calculate(10.0, 5.0, "%").unwrap_err();

        assert!(matches!(err, error::DomainError::UnsupportedOperator(ref s) if s == "%"));
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_chain_empty() {
        let service = create_test_service();
        assert_eq!(
            service.calculate_chain(&[]),
            Err(error::DomainError::EmptyChain)
        );
    }

    #[test]
    fn test_chain_missing_first_operand() {
        let service = create_test_service();
        let steps = [ChainStepInput::next("+", 5.0)];

        assert_eq!(
            service.calculate_chain(&steps),
            Err(error::DomainError::MissingFirstOperand)
        );
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_chain_two_operations() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(10.0, "+", 5.0),
            ChainStepInput::next("*", 2.0),
        ];

        assert_eq!(service.calculate_chain(&steps).unwrap(), 30.0);
        assert_eq!(service.history().len(), 2);
    }

    #[test]
    fn test_chain_three_operations() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(10.0, "+", 5.0),
            ChainStepInput::next("*", 2.0),
            ChainStepInput::next("-", 3.0),
        ];

        assert_eq!(service.calculate_chain(&steps).unwrap(), 27.0);

        let history = service.history();
        assert_eq!(history.len(), 3);
        // each step starts from the previous result
        assert_eq!(history[1].num1, 15.0);
        assert_eq!(history[2].num1, 30.0);
        assert_eq!(history[2].result, 27.0);
    }

    #[test]
    fn test_chain_unsupported_operator() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(10.0, "+", 5.0),
            ChainStepInput::next("%", 2.0),
        ];

        assert_eq!(
            service.calculate_chain(&steps),
            Err(error::DomainError::unsupported_operator("%"))
        );
        // rejected before any step ran
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_chain_malformed_step_records_nothing() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(10.0, "+", 5.0),
            ChainStepInput {
                num1: None,
                num2: Some(2.0),
                operator: None,
            },
        ];

        assert_eq!(
            service.calculate_chain(&steps),
            Err(error::DomainError::malformed_step(1))
        );
        assert!(service.history().is_empty());
    }

    #[test]
    #[traced_test]
    fn test_chain_division_by_zero_keeps_earlier_records() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(10.0, "+", 5.0),
            ChainStepInput::next("/", 0.0),
            ChainStepInput::next("*", 2.0),
        ];

        assert_eq!(
            service.calculate_chain(&steps),
            Err(error::DomainError::DivisionByZero)
        );

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result, 15.0);
        assert!(logs_contain("chain aborted"));
    }

    #[test]
    fn test_overflow_is_not_recorded() {
        let service = create_test_service();

        let err = service.calculate(1e308, 1e308, "*").unwrap_err();

        assert_eq!(err, error::DomainError::NonFiniteResult);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_chain_overflow_keeps_earlier_records() {
        let service = create_test_service();
        let steps = [
            ChainStepInput::first(1e300, "+", 0.0),
            ChainStepInput::next("*", 1e10),
            ChainStepInput::next("+", 1.0),
        ];

        assert_eq!(
            service.calculate_chain(&steps),
            Err(error::DomainError::NonFiniteResult)
        );

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result, 1e300);
    }

    #[test]
    fn test_evaluate_typed_chain() {
        let service = create_test_service();
        let chain = Chain::new(FirstStep {
            num1: 2.0,
            num2: 3.0,
            operator: Operator::Multiply,
        })
        .then(Operator::Divide, 4.0);

        assert_eq!(service.evaluate_chain(&chain).unwrap(), 1.5);
        assert_eq!(service.history_len(), 2);
    }

    #[test]
    fn test_clear_history() {
        let service = create_test_service();
        service.calculate(1.0, 2.0, "+").unwrap();
        service
            .calculate_chain(&[
                ChainStepInput::first(1.0, "+", 1.0),
                ChainStepInput::next("*", 3.0),
            ])
            .unwrap();

        assert_eq!(service.clear_history(), 3);
        assert!(service.history().is_empty());

        // clearing an empty history is fine too
        assert_eq!(service.clear_history(), 0);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_history_bound_from_config() {
        let service = service::Service::new(&CalculatorConfig {
            max_history: Some(2),
            ..CalculatorConfig::default()
        });
        service.calculate(1.0, 1.0, "+").unwrap();
        service.calculate(2.0, 2.0, "+").unwrap();
        service.calculate(3.0, 3.0, "+").unwrap();

        let results: Vec<f64> = service.history().iter().map(|r| r.result).collect();
        assert_eq!(results, vec![4.0, 6.0]);
    }

    #[test]
    fn test_supported_operators() {
        let symbols: Vec<&str> = service::Service::supported_operators()
            .iter()
            .map(|op| op.symbol())
            .collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }
}
