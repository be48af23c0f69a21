use lensify_core::EFFECTS;

/// List the effect catalog with one-line summaries.
pub fn cmd_effects() -> Result<(), String> {
    println!("Available effects:\n");

    for effect in EFFECTS {
        let marker = if effect.is_stochastic() { " *" } else { "" };
        println!("  {:<14} {}{}", effect.name, effect.summary, marker);
    }

    println!("\n{} effects (* varies per run; pin with --seed)", EFFECTS.len());
    Ok(())
}
