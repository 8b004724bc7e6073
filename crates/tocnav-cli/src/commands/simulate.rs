use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use tocnav_core::{LinkIntent, NavigatorConfig, ScrollContainer};
use tocnav_ui::scroll::ScrollConfigExt;
use tocnav_ui::{EngineState, FrameClock, Navigator};

use crate::document::{Outline, SimDocument};

pub struct SimulateOptions {
    pub outline: PathBuf,
    pub clicks: Vec<String>,
    pub fps: Option<u32>,
    pub layout_lag: u32,
    pub max_frames: u32,
    pub json: bool,
}

/// One host frame of the trace
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub link: String,
    pub frame: u32,
    pub state: String,
    pub offset: f64,
    pub scrolled: f64,
    pub content_height: f64,
}

/// Where a click left the document
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub link: String,
    pub intent: Option<LinkIntent>,
    pub frames: u32,
    pub offset: f64,
    pub page: Option<String>,
}

pub async fn run(config: &NavigatorConfig, options: SimulateOptions) -> Result<()> {
    let outline = Outline::load(&options.outline)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    simulate(config, &outline, &options, &mut out).await?;
    Ok(())
}

pub async fn simulate<W: Write>(
    config: &NavigatorConfig,
    outline: &Outline,
    options: &SimulateOptions,
    out: &mut W,
) -> Result<Vec<ClickOutcome>> {
    let doc = SimDocument::build(outline, options.layout_lag);
    let mut navigator = Navigator::new(config, &doc.container, &doc.pages);
    doc.register_all(&mut navigator);

    let frame_interval = match options.fps {
        Some(fps) => Duration::from_secs_f64(1.0 / fps.max(1) as f64),
        None => config.scroll.animation_tick_duration(),
    };
    let mut interval = tokio::time::interval(frame_interval);
    let mut clock = FrameClock::new();

    tracing::info!(
        sections = doc.sections().len(),
        frame_interval_ms = frame_interval.as_secs_f64() * 1000.0,
        layout_lag = options.layout_lag,
        "Simulation ready"
    );

    let mut outcomes = Vec::with_capacity(options.clicks.len());
    for link in &options.clicks {
        let page_before = doc.pages.current();
        let intent = navigator.handle_link_activated(link);
        if !options.json {
            writeln!(out, "click {:?} -> {}", link, describe(&intent, &doc))?;
        }

        // The outline only describes the starting page; sections of a page
        // that was navigated away from must not stay resolvable
        let page = doc.pages.current();
        if page != page_before {
            tracing::info!(from = ?page_before, to = ?page, "Page replaced, clearing sections");
            navigator.clear_registry();
        }

        // The click lands between frames; the first frame after it has no
        // meaningful delta yet
        clock.reset();
        clock.tick_at(tokio::time::Instant::now().into_std());

        let mut frame = 0;
        while navigator.needs_update() && frame < options.max_frames {
            interval.tick().await;
            let dt = clock.tick_at(tokio::time::Instant::now().into_std());

            // Host layout runs before the navigator sees the frame
            doc.container.on_frame();
            let state = navigator.tick(dt);
            frame += 1;

            let record = FrameRecord {
                link: link.clone(),
                frame,
                state: format!("{:?}", state),
                offset: doc.container.normalized_offset(),
                scrolled: doc.container.scrolled_distance(),
                content_height: doc.container.content_height(),
            };
            write_record(out, &record, options.json)?;
        }

        if navigator.state() != EngineState::Idle {
            tracing::warn!(link = %link, frames = frame, "Scroll still running at frame limit");
        }

        outcomes.push(ClickOutcome {
            link: link.clone(),
            intent,
            frames: frame,
            offset: doc.container.normalized_offset(),
            page: doc.pages.current(),
        });
    }

    tracing::info!(layout_passes = doc.container.layout_passes(), "Simulation finished");
    Ok(outcomes)
}

fn describe(intent: &Option<LinkIntent>, doc: &SimDocument) -> String {
    match intent {
        Some(LinkIntent::ScrollToSection(id)) => match doc.section(id.as_str()) {
            Some(section) => format!("scroll to {:?} ({})", section.title(), section.id()),
            None => format!("scroll to unknown section {}", id),
        },
        Some(LinkIntent::NavigateToPage(page)) => format!("navigate to page {}", page),
        Some(LinkIntent::ClipboardAction) => "clipboard action".to_string(),
        None => "ignored".to_string(),
    }
}

fn write_record<W: Write>(out: &mut W, record: &FrameRecord, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
    } else {
        writeln!(
            out,
            "  frame {:>3}  {:<9}  offset={:.4}  scrolled={:>7.1}  content={:.0}",
            record.frame, record.state, record.offset, record.scrolled, record.content_height
        )?;
    }
    Ok(())
}
