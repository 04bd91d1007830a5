#[cfg(test)]
mod test_network {
    use bayessampler::bn::{
        common::errors::SamplerError,
        model::{build, student_network, Model, NetworkConfig, VariableConfig, PROBABILITY_TOLERANCE},
    };
    use std::io::Write;

    fn assert_configuration_error(config: NetworkConfig, needle: &str) {
        match Model::from_config(config) {
            Err(SamplerError::Configuration(message)) => {
                assert!(message.contains(needle), "unexpected message: {message}")
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_student_network_structure() {
        let model = build().unwrap();
        assert_eq!(model.variables().len(), 5);

        let cards = model.cardinalities();
        assert_eq!(cards["difficulty"], 2);
        assert_eq!(cards["intelligence"], 2);
        assert_eq!(cards["grade"], 3);
        assert_eq!(cards["sat"], 2);
        assert_eq!(cards["letter"], 3);

        let edges = model.edges();
        assert_eq!(
            edges,
            vec![
                ("difficulty", "grade"),
                ("intelligence", "grade"),
                ("intelligence", "sat"),
                ("grade", "letter"),
            ]
        );
        assert_eq!(
            model.topological_names(),
            vec!["difficulty", "intelligence", "grade", "sat", "letter"]
        );
    }

    #[test]
    fn test_every_cpt_column_sums_to_one() {
        let model = build().unwrap();
        for variable in model.variables() {
            assert_eq!(variable.cpt.rows(), variable.cardinality);
            let expected_columns: usize = variable
                .parents
                .iter()
                .map(|p| model.variables()[*p].cardinality)
                .product();
            assert_eq!(variable.cpt.columns(), expected_columns);
            for column in 0..variable.cpt.columns() {
                let total = variable.cpt.column(column).sum();
                assert!(
                    (total - 1.0).abs() <= PROBABILITY_TOLERANCE,
                    "{} column {} sums to {}",
                    variable.name,
                    column,
                    total
                );
            }
        }
    }

    #[test]
    fn test_grade_columns_follow_parent_order() {
        let model = build().unwrap();
        let grade = model.index_of("grade").unwrap();
        let difficulty = model.index_of("difficulty").unwrap();
        let intelligence = model.index_of("intelligence").unwrap();

        let mut assignment = vec![0; 5];
        assignment[difficulty] = 1;
        assignment[intelligence] = 0;
        let column = model.column_index(grade, &assignment);
        assert_eq!(column, 2);
        let cpt = &model.variables()[grade].cpt;
        assert_eq!(cpt.column(column).to_vec(), vec![0.9, 0.08, 0.02]);

        assignment[difficulty] = 0;
        assignment[intelligence] = 1;
        let column = model.column_index(grade, &assignment);
        assert_eq!(column, 1);
        assert_eq!(cpt.column(column).to_vec(), vec![0.05, 0.25, 0.7]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build().unwrap();
        let second = build().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.labels()["grade"], ["A", "B", "C"]);
        assert_eq!(first.variable("sat").unwrap().label(1), "high");
    }

    #[test]
    fn test_rejects_column_not_summing_to_one() {
        let mut config = student_network();
        config.variables[3].values = vec![vec![0.95, 0.3], vec![0.05, 0.8]];
        assert_configuration_error(config, "sums to");
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let mut config = student_network();
        config.variables[0].values = vec![vec![1.0]];
        assert_configuration_error(config, "rows");
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        let mut config = student_network();
        config.variables[2].values = vec![vec![0.3, 0.05], vec![0.4, 0.25], vec![0.3, 0.7]];
        assert_configuration_error(config, "columns");
    }

    #[test]
    fn test_rejects_negative_probability() {
        let mut config = student_network();
        config.variables[1].values = vec![vec![1.2], vec![-0.2]];
        assert_configuration_error(config, "invalid probability");
    }

    #[test]
    fn test_rejects_unknown_parent() {
        let mut config = student_network();
        config.variables[3].parents = vec!["motivation".to_string()];
        assert_configuration_error(config, "unknown variable");
    }

    #[test]
    fn test_rejects_duplicate_variable() {
        let mut config = student_network();
        let copy = config.variables[0].clone();
        config.variables.push(copy);
        assert_configuration_error(config, "more than once");
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let mut config = student_network();
        config.variables[2].labels = vec!["A".to_string(), "B".to_string()];
        assert_configuration_error(config, "labels");
    }

    #[test]
    fn test_rejects_cycle() {
        let config = NetworkConfig {
            name: "loop".to_string(),
            variables: vec![
                VariableConfig::conditional("a", &[], &["b"], vec![vec![0.5, 0.5], vec![0.5, 0.5]]),
                VariableConfig::conditional("b", &[], &["a"], vec![vec![0.5, 0.5], vec![0.5, 0.5]]),
            ],
        };
        assert_configuration_error(config, "cycle");
    }

    #[test]
    fn test_rejects_self_loop_and_empty_network() {
        let config = NetworkConfig {
            name: "self".to_string(),
            variables: vec![VariableConfig::conditional(
                "a",
                &[],
                &["a"],
                vec![vec![0.5, 0.5], vec![0.5, 0.5]],
            )],
        };
        assert_configuration_error(config, "itself");

        let empty = NetworkConfig {
            name: "empty".to_string(),
            variables: vec![],
        };
        assert_configuration_error(empty, "no variables");
    }

    #[test]
    fn test_topological_order_independent_of_declaration() {
        let mut config = student_network();
        config.variables.reverse();
        let model = Model::from_config(config).unwrap();
        let order = model.topological_names();
        let position = |name: &str| order.iter().position(|n| *n == name).unwrap();
        for (parent, child) in model.edges() {
            assert!(position(parent) < position(child), "{parent} after {child}");
        }
    }

    #[test]
    fn test_load_network_from_json_file() {
        let json = student_network().to_json_pretty().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = NetworkConfig::from_json_file(file.path()).unwrap();
        let loaded = Model::from_config(config).unwrap();
        let reference = build().unwrap();
        assert_eq!(loaded.edges(), reference.edges());
        assert_eq!(loaded.labels(), reference.labels());
        for (a, b) in loaded.variables().iter().zip(reference.variables()) {
            let diff = (a.cpt.values() - b.cpt.values()).mapv(f64::abs);
            assert!(diff.iter().all(|d| *d < 1e-12), "{} differs", a.name);
        }
    }

    #[test]
    fn test_missing_network_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = NetworkConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SamplerError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let result = NetworkConfig::from_json_str("{\"name\": \"x\", \"variables\": [");
        assert!(matches!(result, Err(SamplerError::Json(_))));
    }
}
