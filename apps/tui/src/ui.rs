//! Screen composition: intro splash and the quiz card.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
};

use crate::app::{App, Screen};

const DIM: Color = Color::Rgb {
    r: 110,
    g: 118,
    b: 138,
};
const BORDER: Color = Color::Rgb {
    r: 82,
    g: 90,
    b: 112,
};
const LABEL: Color = Color::Rgb {
    r: 140,
    g: 156,
    b: 200,
};
const SLATE: Color = Color::Rgb {
    r: 203,
    g: 213,
    b: 225,
};
const RED: Color = Color::Rgb {
    r: 248,
    g: 113,
    b: 113,
};
const EMERALD: Color = Color::Rgb {
    r: 52,
    g: 211,
    b: 153,
};

pub fn draw(out: &mut impl Write, app: &App) -> io::Result<()> {
    match app.screen {
        Screen::Intro => draw_intro(out, app),
        Screen::Quiz => draw_quiz(out, app),
    }
}

fn draw_intro(out: &mut impl Write, app: &App) -> io::Result<()> {
    let mid = app.height / 2;
    let fade = (app.intro_elapsed / 2.0).clamp(0.0, 1.0);
    let title_color = Color::Rgb {
        r: (230.0 * fade) as u8,
        g: (230.0 * fade) as u8,
        b: (240.0 * fade) as u8,
    };
    put_centered(
        out,
        app.width,
        mid.saturating_sub(2),
        &spaced("THE RIDDLE DIARY"),
        title_color,
    )?;
    put_centered(
        out,
        app.width,
        mid,
        "answers hide inside the questions",
        DIM,
    )?;
    if app.intro_elapsed > 1.5 {
        let blink = 0.5 + 0.5 * (app.intro_elapsed * 3.0).sin();
        let hint = Color::Rgb {
            r: (160.0 * blink) as u8,
            g: (168.0 * blink) as u8,
            b: (188.0 * blink) as u8,
        };
        put_centered(out, app.width, mid + 3, "press any key", hint)?;
    }
    Ok(())
}

fn draw_quiz(out: &mut impl Write, app: &App) -> io::Result<()> {
    put_centered(out, app.width, 1, &spaced("THE RIDDLE DIARY"), DIM)?;
    if app.is_settled() {
        queue!(out, SetAttribute(Attribute::Italic))?;
        put_centered(out, app.width, 2, "\"Mischief Managed\"", EMERALD)?;
        queue!(out, SetAttribute(Attribute::Reset))?;
    }

    let card_w = app.width.saturating_sub(4).min(68).max(30);
    let card_h: u16 = 9;
    let card_x = ((app.width.saturating_sub(card_w)) / 2) as i16 + app.shake_offset();
    let card_x = card_x.max(0) as u16;
    let card_y: u16 = 3;
    draw_box(out, card_x, card_y, card_w, card_h, BORDER)?;

    put_centered(out, app.width, card_y + 2, &spaced("THE RIDDLE"), LABEL)?;

    let question_row = card_y + 4;
    match &app.reveal {
        Some(reveal) => reveal.draw(out, app.width, question_row)?,
        None => crate::anim::draw_static_text(
            out,
            &app.session.current().question,
            app.width,
            question_row,
        )?,
    }

    let (position, total) = app.session.progress();
    put_centered(
        out,
        app.width,
        card_y + card_h - 2,
        &format!("Riddle {position} / {total}"),
        DIM,
    )?;

    match &app.reveal {
        None => draw_options(out, app, card_x, card_y + card_h + 1, card_w)?,
        Some(_) if app.is_settled() => {
            put_centered(
                out,
                app.width,
                card_y + card_h + 2,
                "enter · next riddle",
                SLATE,
            )?;
        }
        Some(_) => {}
    }

    put_centered(
        out,
        app.width,
        app.height.saturating_sub(2),
        "1-4 choose · ←/p prev · →/n skip · r reveal · q quit",
        DIM,
    )?;
    Ok(())
}

fn draw_options(
    out: &mut impl Write,
    app: &App,
    card_x: u16,
    y0: u16,
    card_w: u16,
) -> io::Result<()> {
    let col_w = (card_w / 2).saturating_sub(2) as usize;
    for (idx, option) in app.options.iter().enumerate() {
        let row = y0 + (idx as u16 / 2) * 2;
        let col = idx as u16 % 2;
        let x = card_x + 2 + col * (card_w / 2);
        let flashed = app
            .wrong_flash
            .as_ref()
            .is_some_and(|flash| flash.option == idx);
        let color = if flashed { RED } else { SLATE };
        let mut text = format!("{}) {}", idx + 1, option);
        if text.len() > col_w {
            text.truncate(col_w);
        }
        queue!(
            out,
            cursor::MoveTo(x, row),
            SetForegroundColor(color),
            Print(text)
        )?;
    }
    Ok(())
}

fn draw_box(
    out: &mut impl Write,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    color: Color,
) -> io::Result<()> {
    if w < 2 || h < 2 {
        return Ok(());
    }
    let inner = (w - 2) as usize;
    queue!(out, SetForegroundColor(color))?;
    queue!(
        out,
        cursor::MoveTo(x, y),
        Print(format!("╭{}╮", "─".repeat(inner)))
    )?;
    for row in y + 1..y + h - 1 {
        queue!(out, cursor::MoveTo(x, row), Print("│"))?;
        queue!(out, cursor::MoveTo(x + w - 1, row), Print("│"))?;
    }
    queue!(
        out,
        cursor::MoveTo(x, y + h - 1),
        Print(format!("╰{}╯", "─".repeat(inner)))
    )?;
    Ok(())
}

fn put_centered(
    out: &mut impl Write,
    width: u16,
    y: u16,
    text: &str,
    color: Color,
) -> io::Result<()> {
    let len = text.chars().count() as u16;
    let x = width.saturating_sub(len) / 2;
    queue!(
        out,
        cursor::MoveTo(x, y),
        SetForegroundColor(color),
        Print(text)
    )
}

/// Wide-tracked rendering of a short heading.
fn spaced(text: &str) -> String {
    let mut spaced = String::new();
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_tracks_letters_apart() {
        assert_eq!(spaced("ABC"), "A B C");
        assert_eq!(spaced(""), "");
    }
}
