// ============================================================================
// Basic Usage Example
// ============================================================================

use fixlog::numeric::{FixedI32, FixedU32, U16F16};
use fixlog::prelude::*;

fn main() {
    println!("=== fixlog Example ===\n");

    // What firmware would log for a few fixed-point readings
    let voltage = U16F16::from_f64(3.3).unwrap();
    let temperature = FixedI32::<12>::from_f64(21.75).unwrap();
    let offset = FixedI32::<12>::from_f64(-0.5).unwrap();
    let ratio = FixedU32::<2>::from_f64(0.125).unwrap();

    let log = format!(
        "INFO  [adc] vbat={}\n\
         INFO  [temp] t={} offset={}\n\
         DEBUG [pid] ratio={} ratio_again={}\n\
         WARN  plain line without tokens\n",
        voltage.token(),
        temperature.token(),
        offset.token(),
        ratio.token(),
        ratio.token(),
    );

    println!("Raw log:\n{}", log);

    let filter = LineFilter::new(FilterConfig::new(), TokenRewriter::default()).unwrap();
    let mut out = Vec::new();
    let summary = filter
        .run(&mut log.as_bytes(), &mut out, &InputSource::Stdin)
        .unwrap();

    println!("Filtered log:\n{}", String::from_utf8_lossy(&out));

    println!("=== Summary ===");
    println!("Lines: {}", summary.lines);
    println!("Tokens rewritten: {}", summary.tokens_rewritten);
    println!(
        "Negative signed values are logged with a minus sign and pass through: {}",
        offset.token()
    );

    println!("\n=== Single Tokens ===");
    for text in ["f16u32768", "f0i0", "f24u16777216", "f40u3"] {
        let token: FixedToken = text.parse().unwrap();
        println!("  {} -> {}", text, token.render().unwrap());
    }
}
