//! Fixed-layout text rendering of analysis outcomes.

use crate::config::Instrument;
use crate::error::AnalysisError;
use crate::models::{AnalysisResult, Report, SignalTone};

/// Tone a successful result is styled with.
pub fn tone(result: &AnalysisResult) -> SignalTone {
    if result.is_buy {
        SignalTone::Bullish
    } else {
        SignalTone::Bearish
    }
}

/// Render the fixed-order report block for one result.
pub fn render(result: &AnalysisResult) -> String {
    let action = if result.is_buy { "BUY" } else { "SELL" };
    format!(
        "LIVE: {timestamp}\n\
         ==============================\n\
         ACTION: {action}\n\
         PROBABILITY: {probability:.1}%\n\
         INVESTMENT:  {investment:.2} EUR\n\
         ------------------------------\n\
         TREND ANALYSIS:\n\
         Fit quality (R2): {r2:.2}\n\
         Trend cleanliness: {efficiency:.2}\n\
         ------------------------------\n\
         ENTRY: {entry:.2} -> TARGET: {target:.2}\n\
         ------------------------------\n\
         TP 1: {tp1:.2} ({p1:+.2} EUR)\n\
         TP 2: {tp2:.2} ({p2:+.2} EUR)\n\
         TP 3: {tp3:.2} ({p3:+.2} EUR)\n\
         \n\
         SL:   {sl:.2} ({psl:+.2} EUR)\n\
         ------------------------------\n\
         Note: probability reflects the\n\
         cleanliness of the current move.",
        timestamp = result.timestamp.format("%H:%M:%S"),
        action = action,
        probability = result.probability * 100.0,
        investment = result.investment,
        r2 = result.r2_score,
        efficiency = result.efficiency_ratio,
        entry = result.current_price,
        target = result.forecast_price,
        tp1 = result.take_profit[0],
        p1 = result.level_profits[0],
        tp2 = result.take_profit[1],
        p2 = result.level_profits[1],
        tp3 = result.take_profit[2],
        p3 = result.level_profits[2],
        sl = result.stop_loss,
        psl = result.level_profits[3],
    )
}

/// Build the display report for a successful analysis.
pub fn success_report(instrument: &Instrument, result: &AnalysisResult) -> Report {
    Report {
        symbol: instrument.symbol.clone(),
        label: instrument.label.clone(),
        tone: tone(result),
        text: render(result),
    }
}

/// Neutral-toned report naming a failed analysis. Front-ends display it
/// like any other report; no error escapes past this shape.
pub fn error_report(instrument: &Instrument, error: &AnalysisError) -> Report {
    Report {
        symbol: instrument.symbol.clone(),
        label: instrument.label.clone(),
        tone: SignalTone::Neutral,
        text: format!("Analysis unavailable for {}: {}", instrument.symbol, error),
    }
}
