//! Hard-coded running cost estimate shown next to the configuration
//!
//! The figures are fixed quotes for the default Sarvam stack at 100
//! conversations a day. Only the totals are derived.

/// Days used to turn a daily figure into a monthly one
pub const DAYS_PER_MONTH: u32 = 30;

/// One priced component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostLine {
    pub label: &'static str,
    /// Rupees per day; zero renders as FREE
    pub rupees_per_day: u32,
}

/// Daily/monthly estimate for a fixed conversation volume
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostEstimate {
    pub conversations_per_day: u32,
    pub lines: Vec<CostLine>,
}

impl Default for CostEstimate {
    fn default() -> Self {
        Self {
            conversations_per_day: 100,
            lines: vec![
                CostLine {
                    label: "STT",
                    rupees_per_day: 100,
                },
                CostLine {
                    label: "TTS",
                    rupees_per_day: 27,
                },
                CostLine {
                    label: "LLM",
                    rupees_per_day: 0,
                },
            ],
        }
    }
}

impl CostEstimate {
    pub fn total_per_day(&self) -> u32 {
        self.lines.iter().map(|l| l.rupees_per_day).sum()
    }

    pub fn total_per_month(&self) -> u32 {
        self.total_per_day() * DAYS_PER_MONTH
    }

    /// Card heading
    pub fn title(&self) -> String {
        format!(
            "Cost Estimate ({} conversations/day):",
            self.conversations_per_day
        )
    }

    /// One-line breakdown, e.g. `STT: ₹100/day • ... • Total: ₹127/day (₹3,810/month)`
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                if line.rupees_per_day == 0 {
                    format!("{}: FREE", line.label)
                } else {
                    format!("{}: ₹{}/day", line.label, group_thousands(line.rupees_per_day))
                }
            })
            .collect();

        parts.push(format!(
            "Total: ₹{}/day (₹{}/month)",
            group_thousands(self.total_per_day()),
            group_thousands(self.total_per_month())
        ));

        parts.join(" • ")
    }
}

/// 3810 -> "3,810"
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
