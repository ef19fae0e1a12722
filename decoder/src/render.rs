use anyhow::Result;
use itertools::Itertools;
use taskcfg_core::DecodedConfig;

use crate::config::OutputFormat;

pub fn render(raw: &str, config: &DecodedConfig, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(raw, config),
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        OutputFormat::Json => serde_json::to_string_pretty(config)? + "\n",
    })
}

/// The report format the task executor tooling has always printed.
pub fn render_text(raw: &str, config: &DecodedConfig) -> String {
    let positions = config.params.iter().map(|p| p.position).join(", ");

    let mut out = format!(
        "CONFIG:{raw}\n\
         Param Type: \t\t\t{}\n\
         Reference Count: \t\t{}\n\
         Param Config:({:016x}) [{positions}]\n\
         ========= reference config ===========\n",
        config.call_type, config.reference_count, config.bitmap,
    );

    for param in &config.params {
        let slot = match param.stack_slot {
            Some(slot) => slot.to_string(),
            None => "<unassigned>".to_string(),
        };
        out += &format!("replace params[{}] <- local stack[{slot}]\n", param.position);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskcfg_core::decode;

    const RAW: &str = "0x01000000000000000038040302ffffffffffffffffffffffffffffffffffffff";

    #[test]
    fn text_report() -> Result<()> {
        let config = decode(RAW)?;
        assert_eq!(
            render_text(RAW, &config),
            format!(
                "CONFIG:{RAW}\n\
                 Param Type: \t\t\tdynamic delegateCall\n\
                 Reference Count: \t\t0\n\
                 Param Config:(0000000000000038) [5, 4, 3]\n\
                 ========= reference config ===========\n\
                 replace params[5] <- local stack[4]\n\
                 replace params[4] <- local stack[3]\n\
                 replace params[3] <- local stack[2]\n"
            )
        );
        Ok(())
    }

    #[test]
    fn unassigned_slot_is_marked() -> Result<()> {
        let raw = "0x0100000000000000000300ffffffffffffffffffffffffffffffffffffffffff";
        let text = render_text(raw, &decode(raw)?);
        assert!(text.ends_with(
            "replace params[1] <- local stack[<unassigned>]\nreplace params[0] <- local stack[0]\n"
        ));
        Ok(())
    }

    #[test]
    fn json_report() -> Result<()> {
        let out = render(RAW, &decode(RAW)?, OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(value["call_type"], "dynamic_delegate_call");
        assert_eq!(value["bitmap"], 0x38);
        assert_eq!(value["params"][2]["position"], 3);
        assert_eq!(value["params"][2]["stack_slot"], 2);
        Ok(())
    }

    #[test]
    fn yaml_report_round_trips() -> Result<()> {
        let config = decode(RAW)?;
        let out = render(RAW, &config, OutputFormat::Yaml)?;
        assert_eq!(serde_yaml::from_str::<DecodedConfig>(&out)?, config);
        Ok(())
    }
}
