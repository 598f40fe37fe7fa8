use liqsra::base::{Config, ParamSoilProfile};
use liqsra::profile::{ProfileDiscretizer, SoilProfile};
use liqsra::sra::{LinearElasticCalculator, SiteResponseDriver};
use liqsra::Error;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "liqsra_profile",
    about = "Discretizes a soil profile given in a JSON file and writes the slices to another JSON file"
)]
struct Options {
    /// Input soil-profile JSON file
    input: String,

    /// Output profile JSON file
    output: String,

    /// Also prints the linear transfer function (base outcrop to surface outcrop)
    #[structopt(long)]
    transfer: bool,
}

fn main() -> Result<(), Error> {
    // parse options
    let options = Options::from_args();

    // load data
    let config = Config::new();
    let param = ParamSoilProfile::read_json(&options.input)?;
    let soil_profile = SoilProfile::from_param(&param, &config)?;

    // discretize
    let increments = param.increments.as_ref().map(|v| v.as_slice());
    let profile = ProfileDiscretizer::new(&config).discretize(&soil_profile, increments)?;
    profile.write_json(&options.output)?;

    // transfer function
    if options.transfer {
        let driver = SiteResponseDriver::new(&config);
        let (freqs, values) = driver.transfer_function(&LinearElasticCalculator::new(), &profile, None)?;
        println!("{:>12} {:>12}", "freq (Hz)", "|TF|");
        for (i, value) in values.iter().enumerate() {
            println!("{:>12.4} {:>12.4}", freqs[i], value.norm());
        }
    }

    // message
    let thin_line = format!("{:─^1$}", "", options.output.len());
    println!("\n\n{}", thin_line);
    println!("{} slices generated; the profile file is:", profile.n_slices());
    println!("{}", options.output);
    println!("{}\n\n", thin_line);
    Ok(())
}
