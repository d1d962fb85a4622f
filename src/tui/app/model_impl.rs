//! `Model` trait implementation for the dashboard.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::source::{RecordSource, load_records};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let Some(context) = crate::tui::dashboard_context() else {
            let mut model = Self::empty();
            model.status = Some("Nenhuma fonte de dados configurada".to_owned());
            return (model, None);
        };

        let mut model = Self::new(Vec::new(), context.policy)
            .with_export_path(context.export_path.clone())
            .with_filters(context.initial_filters.clone());
        model.loading = true;

        (model, Some(Self::load_cmd(Arc::clone(&context.source))))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_filter_panel());
        output.push('\n');
        output.push_str(&self.render_table());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl DashboardApp {
    /// Command performing the one-off load and reporting it as a message.
    pub(super) fn load_cmd(source: Arc<dyn RecordSource>) -> Cmd {
        Box::pin(async move {
            let records = load_records(source.as_ref()).await;
            Some(Box::new(AppMsg::RecordsLoaded(records)) as Box<dyn Any + Send>)
        })
    }

    /// Clamps the frame to the terminal size.
    ///
    /// Rows are cut one column short of the width to avoid autowrap and
    /// padded with spaces so stale cells are cleared after a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
