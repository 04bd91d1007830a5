use super::config::{NetworkConfig, VariableConfig};

/// The five-variable student performance network.
///
/// ```text
/// difficulty   intelligence
///        \      /      \
///         grade         sat
///           |
///         letter
/// ```
pub fn student_network() -> NetworkConfig {
    NetworkConfig {
        name: "student_performance".to_string(),
        variables: vec![
            VariableConfig::root("difficulty", &["easy", "hard"], &[0.6, 0.4]),
            VariableConfig::root("intelligence", &["low", "high"], &[0.7, 0.3]),
            VariableConfig::conditional(
                "grade",
                &["A", "B", "C"],
                &["difficulty", "intelligence"],
                vec![
                    vec![0.3, 0.05, 0.9, 0.5],
                    vec![0.4, 0.25, 0.08, 0.3],
                    vec![0.3, 0.7, 0.02, 0.2],
                ],
            ),
            VariableConfig::conditional(
                "sat",
                &["low", "high"],
                &["intelligence"],
                vec![vec![0.95, 0.2], vec![0.05, 0.8]],
            ),
            VariableConfig::conditional(
                "letter",
                &["A", "B", "C"],
                &["grade"],
                vec![
                    vec![0.9, 0.4, 0.0],
                    vec![0.08, 0.5, 0.2],
                    vec![0.02, 0.1, 0.8],
                ],
            ),
        ],
    }
}
