//! Terminal user interface rendering for the showcase.
//!
//! Header, body and footer are stacked with a `SpacerColumn`. The body holds
//! the bordered container with the ellipsis row, a status block, and the
//! overflow popover when it is open.

use flex_spacer::ellipsis::{row_geometry, EllipsisRowWidget, OverflowPopover, Settled};
use flex_spacer::ui::{centered_rect, validate_terminal_size};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{screen_column, App};

/// Main rendering function that draws the entire UI.
///
/// Takes the app mutably because drawing the row settles its cut index.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if let Err(message) = validate_terminal_size(area.width, area.height) {
        draw_too_small(f, area, &message);
        return;
    }

    let chunks = screen_column().to_flex_space().split(
        area,
        [
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(4), // Footer
        ],
        app.scale(),
    );

    draw_header(f, chunks[0], app);
    draw_body(f, chunks[1], app);
    draw_footer(f, chunks[2], app);

    if app.show_help {
        draw_help(f, area, app);
    }
}

fn draw_too_small(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "Flex Spacer",
            Style::default()
                .fg(app.theme.primary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" - ellipsis row showcase", Style::default().fg(app.theme.muted())),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border())),
    );
    f.render_widget(header, area);
}

/// Draws the container, the status block and the popover.
fn draw_body(f: &mut Frame, area: Rect, app: &mut App) {
    let width = app.container_width.saturating_add(2).min(area.width);
    let container = Rect {
        height: 3.min(area.height),
        width,
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .title(format!(" Container ({} cells) ", app.container_width));
    let inner = block.inner(container);
    f.render_widget(block, container);

    let scale = app.scale();
    let theme = app.theme.clone();
    f.render_stateful_widget(
        EllipsisRowWidget::themed(&theme).scale(scale),
        inner,
        &mut app.row,
    );

    let status_area = Rect {
        y: container.bottom().saturating_add(1),
        height: area.bottom().saturating_sub(container.bottom().saturating_add(1)),
        ..area
    };
    draw_status(f, status_area, app);

    if app.row.is_popover_open() {
        if let Some(anchor) = row_geometry(&app.row, inner, scale).indicator {
            f.render_widget(
                OverflowPopover::themed(&app.row, anchor, &theme).scale(scale),
                area,
            );
        }
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(app.theme.muted());
    let value = Style::default().fg(app.theme.foreground());

    let settled = match app.row.last_settled() {
        Some(Settled::Fits { shrinks }) => format!("fits after {shrinks} shrink(s)"),
        Some(Settled::Saturated { shrinks }) => {
            format!("saturated after {shrinks} shrink(s): the indicator alone overflows")
        }
        Some(Settled::Unmeasured { .. }) => "waiting for a measurable container".to_string(),
        Some(Settled::DepthLimited) => "stopped at the shrink bound".to_string(),
        None => "not laid out yet".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Visible: ", label),
            Span::styled(
                format!("{} of {}", app.row.cut_index(), app.row.len()),
                value,
            ),
            Span::styled("   Max items: ", label),
            Span::styled(app.row.max_visible().to_string(), value),
            Span::styled("   Gap: ", label),
            Span::styled(app.row.gap_spec().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Layout: ", label),
            Span::styled(settled, value),
        ]),
        Line::from(vec![
            Span::styled("Hidden: ", label),
            Span::styled(app.row.overflow().join(", "), value),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Gray);
    let bracket = Style::default().fg(Color::DarkGray);

    let keys = Line::from(vec![
        Span::styled("[", bracket),
        Span::styled("q", key),
        Span::styled(":quit ", text),
        Span::styled("?", key),
        Span::styled(":help ", text),
        Span::styled("←→", key),
        Span::styled(":width ", text),
        Span::styled("+-", key),
        Span::styled(":max items ", text),
        Span::styled("a/d", key),
        Span::styled(":add/remove ", text),
        Span::styled("Enter", key),
        Span::styled(":popover", text),
        Span::styled("]", bracket),
    ]);
    let status = Line::from(Span::styled(
        app.status_message.as_str(),
        Style::default().fg(app.theme.primary()),
    ));
    let css = Line::from(Span::styled(
        app.row_style().to_css(),
        Style::default().fg(app.theme.muted()),
    ));

    let footer = Paragraph::new(vec![keys, status, css]).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border())),
    );
    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let section = Style::default()
        .fg(app.theme.primary())
        .add_modifier(Modifier::BOLD);

    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![Span::styled(keys, key), Span::raw(action)])
    };

    let help_text = vec![
        Line::from(Span::styled("Container", section)),
        entry("  ←/h         ", "Narrow the container"),
        entry("  →/l         ", "Widen the container"),
        Line::from(""),
        Line::from(Span::styled("Row", section)),
        entry("  +           ", "Show one more item at most"),
        entry("  -           ", "Show one less item at most"),
        entry("  a           ", "Add an item"),
        entry("  d           ", "Remove the last item"),
        entry("  Enter/Space ", "Toggle the overflow popover"),
        Line::from(""),
        Line::from(Span::styled("General", section)),
        entry("  Esc         ", "Close popover or help"),
        entry("  ?           ", "Toggle help"),
        entry("  q           ", "Quit"),
    ];

    let height = u16::try_from(help_text.len()).unwrap_or(u16::MAX).saturating_add(2);
    let help_area = centered_rect(area, 44, height);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border()))
            .style(app.theme.popover_style()),
    );
    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
