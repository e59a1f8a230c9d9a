use num_bigint::BigUint;
use zahlwort::{CardinalVerbose, Composition, MergeStep};

/// Roles a piece of report text can play; each maps to one SGR sequence.
#[derive(Clone, Copy)]
enum Tone {
    Title,
    Section,
    Operand,
    Rule,
    Result,
    Muted,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Title => "1;36",
            Tone::Section => "90",
            Tone::Operand => "33",
            Tone::Rule => "34",
            Tone::Result => "1;32",
            Tone::Muted => "2",
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn tone(&self, tone: Tone, text: impl std::fmt::Display) -> String {
        if self.color { format!("\x1b[{}m{text}\x1b[0m", tone.sgr()) } else { text.to_string() }
    }

    fn section(&self, name: &str) {
        println!("\n{}", self.tone(Tone::Section, format!("━━━ {name} ━━━")));
    }
}

pub fn print_trace(input: &str, verbose: &CardinalVerbose, color: bool) {
    let painter = Painter { color };
    println!("\n{}", painter.tone(Tone::Title, format!("⚙  Spelling: {input}")));

    painter.section("Merges");
    if verbose.steps.is_empty() {
        println!("  {}", painter.tone(Tone::Muted, "Single table word, nothing to merge"));
    }
    for (idx, step) in verbose.steps.iter().enumerate() {
        print_step(idx, step, &painter);
    }

    painter.section("Result");
    println!("  {}", painter.tone(Tone::Result, &verbose.text));

    painter.section("Timing");
    println!(
        "  Total: {}  │  Merges: {}",
        painter.tone(Tone::Result, format!("{:?}", verbose.elapsed)),
        painter.tone(Tone::Rule, verbose.steps.len()),
    );
    println!();
}

fn print_step(idx: usize, step: &MergeStep, painter: &Painter) {
    let operand = |text: &str, value: &BigUint| painter.tone(Tone::Operand, format!("{text} ({value})"));
    println!(
        "  {} {} {} {} {} {}",
        painter.tone(Tone::Section, format!("[{idx}]")),
        operand(&step.current.text, &step.current.value),
        painter.tone(Tone::Muted, "+"),
        operand(&step.next.text, &step.next.value),
        painter.tone(Tone::Muted, "→"),
        painter.tone(Tone::Result, &step.result.text),
    );
    println!(
        "      {} {}",
        painter.tone(Tone::Muted, "rule:"),
        painter.tone(Tone::Rule, composition_label(step.composition))
    );
}

fn composition_label(composition: Composition) -> String {
    match composition {
        Composition::CompoundPrefix => "compound prefix".to_string(),
        Composition::Elide => "elide".to_string(),
        Composition::Multiply { feminine, pluralize, spaced } => {
            let flags: Vec<&str> = [(feminine, "feminine"), (pluralize, "plural"), (spaced, "spaced")]
                .into_iter()
                .filter_map(|(on, name)| on.then_some(name))
                .collect();
            if flags.is_empty() { "multiply".to_string() } else { format!("multiply [{}]", flags.join(", ")) }
        }
        Composition::AddUnd => "add with und".to_string(),
        Composition::AddSpaced => "add spaced".to_string(),
        Composition::AddPlain => "add".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let painter = Painter { color: false };
        assert_eq!(painter.tone(Tone::Result, "einundzwanzig"), "einundzwanzig");
    }

    #[test]
    fn colored_output_wraps_in_sgr() {
        let painter = Painter { color: true };
        assert_eq!(painter.tone(Tone::Rule, "add"), "\x1b[34madd\x1b[0m");
    }

    #[test]
    fn multiply_labels_list_active_flags() {
        let label = composition_label(Composition::Multiply { feminine: true, pluralize: false, spaced: true });
        assert_eq!(label, "multiply [feminine, spaced]");
        let plain = Composition::Multiply { feminine: false, pluralize: false, spaced: false };
        assert_eq!(composition_label(plain), "multiply");
    }
}
