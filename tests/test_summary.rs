#[cfg(test)]
mod test_summary {
    use bayessampler::bn::{
        common::errors::SamplerError,
        inference::{ForwardSampler, SampleCount},
        model::{build, Model, NetworkConfig, VariableConfig},
        summary::{
            conditional_frequencies, describe, describe_values, grouped_describe, value_counts,
        },
    };

    #[test]
    fn test_describe_values_quantiles() {
        let stats = describe_values("x", &[0, 1, 2, 3, 4]);
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 2.0).abs() < 1e-12);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.q25, 1.0);
        assert_eq!(stats.q50, 2.0);
        assert_eq!(stats.q75, 3.0);
        assert_eq!(stats.max, 4.0);

        let stats = describe_values("y", &[0, 1]);
        assert!((stats.q25 - 0.25).abs() < 1e-12);
        assert!((stats.q75 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_describe_of_empty_and_single() {
        let empty = describe_values("x", &[]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());
        assert!(empty.q50.is_nan());

        let single = describe_values("x", &[2]);
        assert_eq!(single.mean, 2.0);
        assert!(single.std.is_nan());
        assert_eq!(single.q75, 2.0);
    }

    #[test]
    fn test_value_counts_cover_all_outcomes() {
        let model = build().unwrap();
        let set = ForwardSampler::new(&model).sample_seeded(3, SampleCount::new(1000)).unwrap();
        let counts = value_counts(&set, &model, "grade").unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().sum::<usize>(), 1000);

        let stats = describe(&set);
        assert_eq!(stats.len(), 5);
        assert!(stats.iter().all(|s| s.count == 1000));
        assert!(stats.iter().all(|s| s.min >= 0.0 && s.max <= 2.0));
    }

    #[test]
    fn test_grouped_describe_sat_by_intelligence() {
        let model = build().unwrap();
        let set = ForwardSampler::new(&model).sample_seeded(8, SampleCount::new(10_000)).unwrap();
        let groups = grouped_describe(&set, &model, "intelligence", "sat").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "low");
        assert_eq!(groups[1].label, "high");
        assert_eq!(groups[0].stats.count + groups[1].stats.count, 10_000);
        assert!((groups[0].stats.mean - 0.05).abs() < 0.03);
        assert!((groups[1].stats.mean - 0.8).abs() < 0.03);
    }

    #[test]
    fn test_unknown_variable_is_invalid_argument() {
        let model = build().unwrap();
        let set = ForwardSampler::new(&model).sample_seeded(1, SampleCount::new(10)).unwrap();
        assert!(matches!(
            value_counts(&set, &model, "attendance"),
            Err(SamplerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_set_summaries() {
        let model = build().unwrap();
        let set = ForwardSampler::new(&model).sample_seeded(1, SampleCount::new(0)).unwrap();
        assert_eq!(value_counts(&set, &model, "letter").unwrap(), vec![0, 0, 0]);
        let groups = grouped_describe(&set, &model, "grade", "letter").unwrap();
        assert!(groups.iter().all(|g| g.stats.count == 0));
    }

    fn two_roots(x_marginal: &[f64]) -> Model {
        Model::from_config(NetworkConfig {
            name: "two_roots".to_string(),
            variables: vec![
                VariableConfig::root("x", &[], x_marginal),
                VariableConfig::root("y", &[], &[0.5, 0.5]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_sample_set_from_other_network_is_rejected() {
        let wide = two_roots(&[0.0, 0.0, 1.0]);
        let narrow = two_roots(&[0.5, 0.5]);
        let set = ForwardSampler::new(&wide).sample_seeded(1, SampleCount::new(20)).unwrap();
        assert!(set.column("x").unwrap().iter().all(|x| *x == 2));

        assert!(matches!(
            value_counts(&set, &narrow, "x"),
            Err(SamplerError::InvalidArgument(_))
        ));
        assert!(matches!(
            conditional_frequencies(&set, &narrow, "x", "y"),
            Err(SamplerError::InvalidArgument(_))
        ));
        assert!(matches!(
            conditional_frequencies(&set, &narrow, "y", "x"),
            Err(SamplerError::InvalidArgument(_))
        ));
    }
}
