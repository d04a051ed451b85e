use std::fmt::{self, Write};

use crate::{BatteryIcon, CardConfig, LeafState, VocBand, LEAF_COUNT};

pub const LEAF_ICON: &str = "mdi:leaf";

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Warning(String),
    Error(ErrorCard),
    AirQuality(AirQualityView),
}

/// Delegated error card. Carries the configuration the card was given for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCard {
    pub error: String,
    pub orig_config: CardConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueDisplay {
    Reading { value: f64, unit: String },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityView {
    pub label: String,
    pub header: Option<String>,
    pub band: Option<VocBand>,
    pub leaves: [LeafState; LEAF_COUNT],
    pub value: ValueDisplay,
    pub message: String,
    pub battery: Option<BatteryIcon>,
    pub has_hold: bool,
    pub has_double_click: bool,
}

impl AirQualityView {
    pub fn active_leaves(&self) -> usize {
        self.leaves
            .iter()
            .filter(|leaf| **leaf == LeafState::Active)
            .count()
    }

    /// Value as displayed, e.g. `100 ppb`.
    pub fn value_text(&self) -> Option<String> {
        match &self.value {
            ValueDisplay::Reading { value, unit } => Some(format!("{} {}", value, unit)),
            ValueDisplay::Unavailable => None,
        }
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Warning(warning) => {
                write!(f, "<hui-warning>{}</hui-warning>", Escaped(warning))
            }
            CardView::Error(error) => {
                let orig_config = serde_json::to_string(&error.orig_config).unwrap_or_default();
                write!(
                    f,
                    "<hui-error-card error=\"{}\" orig-config=\"{}\"></hui-error-card>",
                    Escaped(&error.error),
                    Escaped(&orig_config)
                )
            }
            CardView::AirQuality(view) => fmt::Display::fmt(view, f),
        }
    }
}

impl fmt::Display for AirQualityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ha-card tabindex=\"0\" label=\"{}\"", Escaped(&self.label))?;
        if self.has_hold {
            f.write_str(" has-hold")?;
        }
        if self.has_double_click {
            f.write_str(" has-double-click")?;
        }
        f.write_str(">")?;
        if let Some(header) = &self.header {
            write!(f, "<h1 class=\"card-header\">{}</h1>", Escaped(header))?;
        }
        f.write_str("<div class=\"cov-container\"><div class=\"cov-column\"><div class=\"leaf-items\">")?;
        for leaf in &self.leaves {
            write!(
                f,
                "<div class=\"leaf-item {}\"><ha-icon icon=\"{}\"></ha-icon></div>",
                leaf.css_class(),
                LEAF_ICON
            )?;
        }
        write!(
            f,
            "</div><div class=\"cov-message\"><span>{}</span></div></div>",
            Escaped(&self.message)
        )?;
        f.write_str("<div class=\"cov-column\"><div class=\"cov-display\">")?;
        match &self.value {
            ValueDisplay::Reading { value, unit } => write!(
                f,
                "<div class=\"cov-value\">{}<span class=\"cov-unit\">{}</span></div>",
                value,
                Escaped(unit)
            )?,
            ValueDisplay::Unavailable => {
                f.write_str("<div class=\"cov-value cov-unavailable\">-</div>")?
            }
        }
        f.write_str("</div>")?;
        if let Some(battery) = &self.battery {
            write!(
                f,
                "<div class=\"cov-battery\"><ha-icon icon=\"{}\"></ha-icon></div>",
                battery.icon()
            )?;
        }
        f.write_str("</div></div></ha-card>")
    }
}
