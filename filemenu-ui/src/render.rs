use clap::ValueEnum;
use filemenu_core::{Menu, MenuEntry, MenuGroup};
use serde::Serialize;

const DIVIDER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markup,
    Json,
}

#[derive(Debug, Serialize)]
struct RenderedMenu {
    group_dividers: bool,
    sections: Vec<Vec<RenderedEntry>>,
}

#[derive(Debug, Serialize)]
struct RenderedEntry {
    id: &'static str,
    group: MenuGroup,
    title: String,
    markup: String,
    enabled: bool,
}

impl From<&MenuEntry> for RenderedEntry {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            id: entry.id.key(),
            group: entry.group,
            title: entry.title.as_str().to_string(),
            markup: entry.title.to_markup(),
            enabled: entry.enabled,
        }
    }
}

pub fn render_menu(menu: &Menu, format: OutputFormat) -> anyhow::Result<String> {
    let sections = menu.sections();
    match format {
        OutputFormat::Json => {
            let rendered = RenderedMenu {
                group_dividers: menu.group_dividers(),
                sections: sections
                    .into_iter()
                    .map(|section| section.into_iter().map(RenderedEntry::from).collect())
                    .collect(),
            };
            Ok(serde_json::to_string_pretty(&rendered)?)
        }
        OutputFormat::Text => Ok(render_lines(&sections, |entry| {
            entry.title.as_str().to_string()
        })),
        OutputFormat::Markup => Ok(render_lines(&sections, |entry| entry.title.to_markup())),
    }
}

fn render_lines<F>(sections: &[Vec<&MenuEntry>], title: F) -> String
where
    F: Fn(&MenuEntry) -> String,
{
    sections
        .iter()
        .map(|section| {
            section
                .iter()
                .map(|entry| title(entry))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{DIVIDER}\n"))
}
