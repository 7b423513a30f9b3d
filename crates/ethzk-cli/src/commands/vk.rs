use anyhow::{Context, Result};
use ethzk_circuit::serialize::serialize_vk;
use ethzk_circuit::{constraint_count, EthSignatureProgram};
use ethzk_host::HostConfig;

use crate::output;

pub fn run() -> Result<()> {
    let sp = output::spinner("setting up circuit...");
    let mut rng = HostConfig::from_env().rng();
    let mut program = EthSignatureProgram::new();
    let vk = program.compile(&mut rng)?;
    let svk = serialize_vk(vk).context("cannot serialize verifying key")?;
    let constraints = constraint_count().context("cannot count constraints")?;
    sp.finish_and_clear();

    if output::is_json() {
        output::json_output(serde_json::json!({
            "program": EthSignatureProgram::NAME,
            "constraints": constraints,
            "vk": serde_json::to_value(&svk)?,
        }));
    } else {
        output::label("program", EthSignatureProgram::NAME);
        output::label("constraints", &constraints.to_string());
        output::label("alpha_g1", &svk.alpha_g1);
        output::label("beta_g2", &svk.beta_g2);
        output::label("gamma_g2", &svk.gamma_g2);
        output::label("delta_g2", &svk.delta_g2);
        for (i, ic) in svk.ic.iter().enumerate() {
            output::label(&format!("ic[{i}]"), ic);
        }
        if HostConfig::from_env().rng_seed.is_none() {
            output::status(false, "random setup: set ETHZK_RNG_SEED for a reproducible key");
        }
    }
    Ok(())
}
