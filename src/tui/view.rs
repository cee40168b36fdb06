// File: src/tui/view.rs
use crate::forecast::ForecastPoint;
use crate::report::{CategoryCount, MonthlySeries};
use crate::session::ViewError;
use crate::tui::action::Page;
use crate::tui::state::{AppState, Focus, FormField, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row,
        Table, Wrap,
    },
};
use strum::IntoEnumIterator;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab:Switch Focus  1-7:Jump to Page  ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  h/l:Previous/Next (region, staff)"),
        ]),
        Line::from(vec![
            Span::styled(
                " ADD ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Enter/e:Edit Field  s:Save  Esc:Cancel Edit"),
        ]),
        Line::from(vec![
            Span::styled(
                " PAGES ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Forecast r:Re-roll  Staff a:Add  Generate Enter:Replace Data"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(v_chunks[0]);

    // --- Sidebar ---
    let sidebar_style = if state.active_focus == Focus::Sidebar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let menu_items: Vec<ListItem> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, p)| ListItem::new(format!("{} {}", i + 1, p)))
        .collect();
    let sidebar = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .border_style(sidebar_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Blue),
        );
    f.render_stateful_widget(sidebar, h_chunks[0], &mut state.menu_state);

    // --- Main ---
    let main_style = if state.active_focus == Focus::Main {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.page))
        .border_style(main_style);
    let main_area = main_block.inner(h_chunks[1]);
    f.render_widget(main_block, h_chunks[1]);

    match state.page {
        Page::Dashboard => draw_dashboard(f, state, main_area),
        Page::AddProcedure => draw_form(f, state, main_area),
        Page::MonthlyReport => draw_monthly_report(f, state, main_area),
        Page::RegionReport => draw_region_report(f, state, main_area),
        Page::Forecast => draw_forecast(f, state, main_area),
        Page::ManageStaff => draw_staff(f, state, main_area),
        Page::GenerateTestData => draw_generate(f, state, main_area),
    }

    // --- Footer ---
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);

    if state.mode == InputMode::EditingStaff {
        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(state.input_buffer.as_str()),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Add Staff "));
        f.render_widget(input, footer_area);
        let cursor_x = footer_area
            .x
            .saturating_add(3)
            .saturating_add(u16::try_from(state.cursor_position).unwrap_or(u16::MAX));
        f.set_cursor_position((
            cursor_x.min(footer_area.x + footer_area.width.saturating_sub(2)),
            footer_area.y + 1,
        ));
    } else if state.show_full_help {
        let p = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .wrap(Wrap { trim: false });
        f.render_widget(p, footer_area);
    } else {
        let status_color = if state.message.starts_with("Warning") {
            Color::LightRed
        } else {
            Color::Cyan
        };
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(status_color))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                    .title(" Status "),
            );
        let help_str = match state.active_focus {
            Focus::Sidebar => "?:Help q:Quit Tab:Page ↵:Open j/k:Move",
            Focus::Main => page_help(state.page),
        };
        let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(footer_area);
        f.render_widget(status, chunks[0]);
        f.render_widget(help, chunks[1]);
    }
}

fn page_help(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "?:Help q:Quit Tab:Menu 1-7:Page",
        Page::MonthlyReport => "?:Help q:Quit Tab:Menu j/k:Scroll",
        Page::AddProcedure => "?:Help Tab:Menu j/k:Field ↵:Edit h/l:Staff s:Save",
        Page::RegionReport => "?:Help Tab:Menu h/l:Region j/k:Scroll",
        Page::Forecast => "?:Help Tab:Menu r:Re-roll",
        Page::ManageStaff => "?:Help Tab:Menu a:Add Staff",
        Page::GenerateTestData => "?:Help Tab:Menu ↵:Generate",
    }
}

fn no_data(f: &mut Frame, area: Rect, err: &ViewError) {
    let p = Paragraph::new(err.to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn count_bars(counts: &[CategoryCount]) -> Vec<Bar<'static>> {
    counts
        .iter()
        .map(|(name, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(name.clone()))
        })
        .collect()
}

fn series_bars(series: &MonthlySeries) -> Vec<Bar<'static>> {
    series
        .iter()
        .map(|(period, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(period.to_string()))
        })
        .collect()
}

fn bar_chart<'a>(title: &'a str, bars: &'a [Bar<'a>], direction: Direction) -> BarChart<'a> {
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(BarGroup::default().bars(bars))
        .bar_gap(1)
        .direction(direction)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    if direction == Direction::Vertical {
        chart.bar_width(7)
    } else {
        chart.bar_width(1)
    }
}

fn draw_dashboard(f: &mut Frame, state: &AppState, area: Rect) {
    let dashboard = match state.session.dashboard() {
        Ok(d) => d,
        Err(e) => return no_data(f, area, &e),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(45),
            Constraint::Min(0),
        ])
        .split(area);

    let s = dashboard.summary;
    let metrics = [
        ("Procedures", s.procedures),
        ("Hospitals", s.hospitals),
        ("Regions", s.regions),
        ("Staff", s.staff),
    ];
    let metric_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for ((label, value), chunk) in metrics.iter().zip(metric_chunks.iter()) {
        let p = Paragraph::new(Line::from(vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", label)));
        f.render_widget(p, *chunk);
    }

    let monthly = series_bars(&dashboard.monthly);
    f.render_widget(
        bar_chart(" Monthly Growth ", &monthly, Direction::Vertical),
        rows[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    let regions = count_bars(&dashboard.regions);
    f.render_widget(
        bar_chart(" Regional Distribution ", &regions, Direction::Horizontal),
        bottom[0],
    );
    let staff = count_bars(&dashboard.top_staff);
    f.render_widget(
        bar_chart(" Staff Participation ", &staff, Direction::Horizontal),
        bottom[1],
    );
}

fn draw_form(f: &mut Frame, state: &AppState, area: Rect) {
    let roster = state.session.list_staff();
    let lines: Vec<Line> = FormField::iter()
        .map(|field| {
            let active = field == state.form.active;
            let editing = active && state.mode == InputMode::EditingField;
            let value = match field {
                FormField::Staff => roster
                    .get(state.form.staff_index)
                    .map(|s| format!("< {} >", s))
                    .unwrap_or_else(|| "(no staff)".to_string()),
                _ if editing => format!("{}_", state.input_buffer),
                _ => state.form.text(field).cloned().unwrap_or_default(),
            };
            let label_style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value_style = if editing {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if active { "> " } else { "  " }, label_style),
                Span::styled(format!("{:<10}", field.to_string()), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    let p = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn draw_monthly_report(f: &mut Frame, state: &mut AppState, area: Rect) {
    let rows = match state.session.monthly_report() {
        Ok(rows) => rows,
        Err(e) => return no_data(f, area, &e),
    };
    let table_rows: Vec<Row> = rows
        .into_iter()
        .map(|r| Row::new(vec![r.period.to_string(), r.region, r.count.to_string()]))
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(16),
        ],
    )
    .header(header_row(&["Month", "Region", "Procedure Count"]))
    .row_highlight_style(Style::default().bg(Color::Blue));
    f.render_stateful_widget(table, area, &mut state.table_state);
}

fn header_row<'a>(cols: &[&'a str]) -> Row<'a> {
    Row::new(cols.to_vec()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_region_report(f: &mut Frame, state: &mut AppState, area: Rect) {
    let Some(region) = state.current_region() else {
        return no_data(f, area, &ViewError::NoData);
    };
    let report = match state.session.region_report(&region) {
        Ok(r) => r,
        Err(e) => return no_data(f, area, &e),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(55),
            Constraint::Min(0),
        ])
        .split(area);

    let regions = state.session.regions();
    let picker = Line::from(vec![
        Span::raw("Region: "),
        Span::styled(
            format!("< {} >", report.region),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}/{})", state.selected_region + 1, regions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(picker), chunks[0]);

    let table_rows: Vec<Row> = report
        .records
        .iter()
        .map(|r| {
            Row::new(vec![
                r.date.to_string(),
                r.hospital.clone(),
                r.procedure.clone(),
                r.surgeon.clone(),
                r.staff.clone(),
                r.notes.clone(),
            ])
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(11),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Min(0),
        ],
    )
    .header(header_row(&[
        "Date",
        "Hospital",
        "Procedure",
        "Surgeon",
        "Staff",
        "Notes",
    ]))
    .row_highlight_style(Style::default().bg(Color::Blue));
    f.render_stateful_widget(table, chunks[1], &mut state.table_state);

    let trend = series_bars(&report.trend);
    f.render_widget(
        bar_chart(" Monthly Trend ", &trend, Direction::Vertical),
        chunks[2],
    );
}

fn forecast_bars(points: &[ForecastPoint]) -> Vec<Bar<'static>> {
    points
        .iter()
        .map(|p| {
            let style = if p.projected {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::Green)
            };
            // Projections may dip below zero; the bar floors at zero but the label keeps the value.
            Bar::default()
                .value(p.value.max(0) as u64)
                .text_value(p.value.to_string())
                .label(Line::from(p.period.to_string()))
                .style(style)
        })
        .collect()
}

fn draw_forecast(f: &mut Frame, state: &mut AppState, area: Rect) {
    if state.forecast.is_none() {
        state.refresh_forecast();
    }
    let points = match &state.forecast {
        Some(Ok(points)) => points,
        Some(Err(e)) => return no_data(f, area, e),
        None => return,
    };
    let bars = forecast_bars(points);
    let chart = bar_chart(
        " History (green) and Projection (magenta) ",
        &bars,
        Direction::Vertical,
    );
    f.render_widget(chart, area);
}

fn draw_staff(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = state
        .session
        .list_staff()
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();
    let title = format!(" Current staff ({}) ", items.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Blue));
    let mut list_state = ListState::default();
    list_state.select(state.table_state.selected());
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_generate(f: &mut Frame, state: &AppState, area: Rect) {
    let lines = vec![
        Line::from(format!(
            "Press Enter to replace all {} record(s) with {} generated test records.",
            state.session.store().len(),
            state.session.synthetic_count
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Records are dated within the last year and use the current staff roster.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
