use anyhow::Result;
use bayessampler::bn::{
    common::setup::{init_logging, parse_configuration_options, OutputFormat},
    explorer,
    inference::{ForwardSampler, SampleSet},
    model::Model,
};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    init_logging();
    let options = parse_configuration_options()?;
    let model = options.load_model()?;

    if options.serve {
        explorer::serve(model, &options.address, options.port)?;
        return Ok(());
    }

    let sampler = ForwardSampler::new(&model);
    let set = match options.seed {
        Some(seed) => sampler.sample_seeded(seed, options.samples)?,
        None => sampler.sample_entropy(options.samples)?,
    };
    info!("drew {} samples from '{}'", set.len(), model.name());

    match options.format {
        OutputFormat::Table => print_table(&model, &set),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
        OutputFormat::Csv => print!("{}", set.to_csv()),
    }
    Ok(())
}

fn print_table(model: &Model, set: &SampleSet) {
    let header: Vec<String> = set
        .columns()
        .iter()
        .map(|c| format!("{:>12}", c))
        .collect();
    println!("{:>6} {}", "#", header.join(" ").bold().blue());
    for index in 0..set.len() {
        let Some(record) = set.labeled_record(index, model) else {
            continue;
        };
        let cells: Vec<String> = set
            .columns()
            .iter()
            .map(|c| format!("{:>12}", record.get(c).map(String::as_str).unwrap_or("")))
            .collect();
        println!("{:>6} {}", index, cells.join(" "));
    }
    println!("{}", format!("{} rows", set.len()).green());
}
