//! Plain-text listings for the `providers` and `catalog` commands.

use std::io::{self, Write};

use modelcfg_providers::{Catalog, InputModality, ModelDescriptor, ResolvedProviders};

pub fn write_providers(out: &mut impl Write, providers: &ResolvedProviders) -> io::Result<()> {
    if providers.is_empty() {
        writeln!(out, "no providers enabled")?;
        return Ok(());
    }

    for (id, provider) in providers {
        writeln!(
            out,
            "{} [{} | {} | key: {}]",
            id, provider.api, provider.base_url, provider.api_key
        )?;
        for model in &provider.models {
            write_model(out, model)?;
        }
    }
    Ok(())
}

pub fn write_catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for entry in catalog.iter() {
        writeln!(
            out,
            "{} [{} | {} | env: {}]",
            entry.id, entry.api, entry.base_url, entry.env_var
        )?;
        for model in entry.models {
            write_model(out, model)?;
        }
    }
    Ok(())
}

fn write_model(out: &mut impl Write, model: &ModelDescriptor) -> io::Result<()> {
    let mut tags = Vec::new();
    if model.reasoning {
        tags.push("reasoning");
    }
    if model.accepts(InputModality::Image) {
        tags.push("vision");
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" ({})", tags.join(", "))
    };

    writeln!(
        out,
        "  {:<40} {}{} ctx={} max={}",
        model.id, model.name, tags, model.context_window, model.max_tokens
    )
}
