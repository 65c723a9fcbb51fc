//! Markdown renderer - a readable progress summary of the product plan.

use crate::render::Renderer;
use anyhow::Result;
use planview_syntax::model::*;
use planview_syntax::parser::ParsedDocument;
use planview_syntax::product::{ProductReport, SectionReport};
use std::collections::BTreeMap;
use std::fmt::Write;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_product(&self, report: &ProductReport) -> Result<String> {
        let data = &report.data;
        let mut out = String::new();

        match data.overview {
            Some(ref overview) => render_overview(&mut out, overview)?,
            None => out.push_str("# Product\n\n_No product overview._\n"),
        }

        match data.roadmap {
            Some(ref roadmap) => {
                out.push_str("\n## Roadmap\n\n");
                render_progress_table(&mut out, roadmap, &data.section_progress)?;
                writeln!(
                    out,
                    "\nScreen designs: {} of {} sections",
                    report.section_stats.with_screen_designs, report.section_stats.total
                )?;
            }
            None => out.push_str("\n## Roadmap\n\n_No roadmap._\n"),
        }

        if let Some(ref data_model) = data.data_model {
            out.push_str("\n## Data Model\n\n");
            render_data_model(&mut out, data_model)?;
        }

        if let Some(ref design) = data.design_system {
            out.push_str("\n## Design System\n\n");
            render_design_system(&mut out, design)?;
        }

        if let Some(ref shell) = data.shell {
            out.push_str("\n## Shell\n\n");
            match shell.spec {
                Some(ref spec) => render_shell(&mut out, spec)?,
                None => out.push_str("_No shell specification._\n"),
            }
            if shell.has_components {
                out.push_str("\nShell components: built\n");
            }
        }

        if let Some(ref url) = report.export_zip_url {
            writeln!(out, "\nExport: [{}]({})", url.trim_start_matches('/'), url)?;
        }

        Ok(out)
    }

    fn render_section(&self, report: &SectionReport) -> Result<String> {
        let record = &report.section_data;
        let mut out = String::new();

        match record.spec_parsed {
            Some(ref spec) => render_section_spec(&mut out, spec)?,
            None => {
                writeln!(out, "# {}", record.section_id)?;
                if record.spec.is_some() {
                    out.push_str("\n_Specification has no recognized content._\n");
                } else {
                    out.push_str("\n_No specification._\n");
                }
            }
        }

        out.push_str("\n## Screen Designs\n\n");
        if record.screen_designs.is_empty() {
            out.push_str("_None yet._\n");
        }
        for design in &record.screen_designs {
            writeln!(out, "- {} (`{}`)", design.name, design.path)?;
        }

        out.push_str("\n## Screenshots\n\n");
        if record.screenshots.is_empty() {
            out.push_str("_None yet._\n");
        }
        for shot in &record.screenshots {
            writeln!(out, "- [{}]({})", shot.name, shot.url)?;
        }

        writeln!(
            out,
            "\nSample data: {}",
            if report.has_data { "present" } else { "missing" }
        )?;
        Ok(out)
    }

    fn render_document(&self, doc: Option<&ParsedDocument>) -> Result<String> {
        let mut out = String::new();
        match doc {
            None => out.push_str("_No recognized content._\n"),
            Some(ParsedDocument::Overview(doc)) => render_overview(&mut out, doc)?,
            Some(ParsedDocument::Roadmap(doc)) => {
                for section in &doc.sections {
                    writeln!(out, "{}. **{}** (`{}`)", section.order, section.title, section.id)?;
                    if !section.description.is_empty() {
                        writeln!(out, "   {}", first_line(&section.description))?;
                    }
                }
            }
            Some(ParsedDocument::DataModel(doc)) => render_data_model(&mut out, doc)?,
            Some(ParsedDocument::Shell(doc)) => render_shell(&mut out, doc)?,
            Some(ParsedDocument::Section(doc)) => render_section_spec(&mut out, doc)?,
        }
        Ok(out)
    }
}

fn render_overview(out: &mut String, overview: &OverviewDoc) -> Result<()> {
    writeln!(out, "# {}", overview.name)?;
    if !overview.description.is_empty() {
        writeln!(out, "\n{}", overview.description)?;
    }
    if !overview.problems.is_empty() {
        out.push_str("\n## Problems & Solutions\n\n");
        for problem in &overview.problems {
            writeln!(out, "- **{}**: {}", problem.title, first_line(&problem.solution))?;
        }
    }
    if !overview.features.is_empty() {
        out.push_str("\n## Key Features\n\n");
        write_bullets(out, &overview.features);
    }
    Ok(())
}

fn render_progress_table(
    out: &mut String,
    roadmap: &RoadmapDoc,
    progress: &BTreeMap<String, SectionProgress>,
) -> Result<()> {
    out.push_str("| # | Section | Spec | Data | Screen designs | Screenshots |\n");
    out.push_str("|---|---------|------|------|----------------|-------------|\n");
    for section in &roadmap.sections {
        let p = progress.get(&section.id).copied().unwrap_or_default();
        writeln!(
            out,
            "| {} | {} (`{}`) | {} | {} | {} | {} |",
            section.order,
            section.title,
            section.id,
            yes_no(p.has_spec),
            yes_no(p.has_data),
            p.screen_design_count,
            p.screenshot_count
        )?;
    }
    Ok(())
}

fn render_data_model(out: &mut String, data_model: &DataModelDoc) -> Result<()> {
    for entity in &data_model.entities {
        if entity.description.is_empty() {
            writeln!(out, "- **{}**", entity.name)?;
        } else {
            writeln!(out, "- **{}**: {}", entity.name, first_line(&entity.description))?;
        }
    }
    if !data_model.relationships.is_empty() {
        out.push_str("\nRelationships:\n\n");
        write_bullets(out, &data_model.relationships);
    }
    Ok(())
}

fn render_design_system(out: &mut String, design: &DesignSystemDoc) -> Result<()> {
    if let Some(ref colors) = design.colors {
        let fields = [
            ("primary", &colors.primary),
            ("secondary", &colors.secondary),
            ("neutral", &colors.neutral),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter_map(|&(label, value)| value.as_deref().map(|v| format!("{} `{}`", label, v)))
            .collect();
        writeln!(out, "- Colors: {}", parts.join(", "))?;
    }
    if let Some(ref typography) = design.typography {
        let mut parts = Vec::new();
        if let Some(ref heading) = typography.heading {
            parts.push(format!("heading {}", heading));
        }
        if let Some(ref body) = typography.body {
            parts.push(format!("body {}", body));
        }
        parts.push(format!("mono {}", typography.mono));
        writeln!(out, "- Typography: {}", parts.join(", "))?;
    }
    Ok(())
}

fn render_shell(out: &mut String, shell: &ShellSpecDoc) -> Result<()> {
    if !shell.overview.is_empty() {
        writeln!(out, "{}", shell.overview)?;
    }
    if !shell.navigation_items.is_empty() {
        out.push_str("\nNavigation:\n\n");
        write_bullets(out, &shell.navigation_items);
    }
    if !shell.layout_pattern.is_empty() {
        writeln!(out, "\nLayout: {}", first_line(&shell.layout_pattern))?;
    }
    Ok(())
}

fn render_section_spec(out: &mut String, spec: &SectionSpecDoc) -> Result<()> {
    writeln!(out, "# {}", spec.title)?;
    if !spec.overview.is_empty() {
        writeln!(out, "\n{}", spec.overview)?;
    }
    if !spec.user_flows.is_empty() {
        out.push_str("\n## User Flows\n\n");
        write_bullets(out, &spec.user_flows);
    }
    if !spec.ui_requirements.is_empty() {
        out.push_str("\n## UI Requirements\n\n");
        write_bullets(out, &spec.ui_requirements);
    }
    if !spec.use_shell {
        out.push_str("\nRenders without the application shell.\n");
    }
    Ok(())
}

fn write_bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
