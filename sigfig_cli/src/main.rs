//! # SigFig CLI Demonstration
//!
//! Walks through the significant-figure engine: construction from literals,
//! precision propagation through the four arithmetic operators, scientific
//! notation, and the advisory channel for ambiguous trailing zeros.
//!
//! The core contributes all behavior; this binary only constructs values,
//! invokes operators, and prints results.

use sigfig_core::{SigFig, SigFigResult};

fn describe(label: &str, n: SigFig) {
    println!("{:<12} -> {} ({} sf)", label, n, n.sig_figs());
}

fn main() -> SigFigResult<()> {
    println!("SigFig CLI - Significant-Figure Arithmetic");
    println!("==========================================");
    println!();

    println!("1. Construction from literals (automatic sig-fig detection):");
    describe("'123.45'", "123.45".parse()?);
    describe("'0.00456'", "0.00456".parse()?);
    describe("'1.20e3'", "1.20e3".parse()?);

    let outcome = SigFig::parse("1200")?;
    describe("'1200'", outcome.number);
    for advisory in &outcome.advisories {
        println!("  advisory: {}", advisory);
    }
    println!();

    println!("2. Explicit precision:");
    describe("1200 @ 2 sf", SigFig::from_parts(1200.0, 2)?);
    describe("1200 @ 4 sf", SigFig::from_parts(1200.0, 4)?);
    println!();

    println!("3. Multiplication and division (min sig-fig rule):");
    let a: SigFig = "25.3".parse()?;
    let b: SigFig = "4.567".parse()?;
    println!("  {} x {} = {}", a, b, a * b);
    println!("  {} / {} = {}", b, a, (b / a)?);
    println!();

    println!("4. Addition and subtraction (decimal-place rule):");
    let c: SigFig = "123.4".parse()?;
    let d: SigFig = "5.678".parse()?;
    println!("  {} + {} = {}", c, d, c + d);
    println!("  {} - {} = {}", c, d, c - d);
    println!();

    println!("5. Scientific notation:");
    let avogadro: SigFig = "6.02e23".parse()?;
    let proton_mass: SigFig = "1.66e-27".parse()?;
    describe("Avogadro", avogadro);
    describe("proton mass", proton_mass);
    println!("  product      -> {}", avogadro * proton_mass);
    println!();

    println!("6. Elementary functions:");
    let x: SigFig = "2.5".parse()?;
    println!("  sqrt({}) = {}", x, x.sqrt()?);
    println!("  ln({})   = {}", x, x.ln()?);
    println!("  exp({})  = {}", x, x.exp());
    let hundred = SigFig::parse_with_sig_figs("100", 3)?;
    println!("  log10({}) = {}", hundred, hundred.log10()?);
    println!();

    println!("7. Operations with bare floats:");
    let tracked: SigFig = "45.6".parse()?;
    println!("  {} x 2.0 = {}", tracked, tracked * 2.0);
    println!();

    println!("8. Molarity example (moles / volume):");
    let moles: SigFig = "0.0456".parse()?;
    let volume: SigFig = "0.250".parse()?;
    let molarity = (moles / volume)?;
    describe("moles", moles);
    describe("volume (L)", volume);
    describe("molarity (M)", molarity);
    println!();

    println!("JSON output (for tooling):");
    if let Ok(json) = serde_json::to_string_pretty(&molarity) {
        println!("{}", json);
    }

    Ok(())
}
