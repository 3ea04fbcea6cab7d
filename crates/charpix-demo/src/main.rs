#![forbid(unsafe_code)]

//! Interactive showcase: a bouncing ball, a spinning polygon, and a
//! pointer-chasing crosshair. Arrow keys nudge the ball, Escape quits.

use std::io;
use std::thread;
use std::time::Duration;

use charpix::prelude::*;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn main() -> io::Result<()> {
    let backend = TerminalBackend::new(TerminalOptions::default())?;
    let mut engine = Engine::new(WIDTH, HEIGHT, backend);

    let mut ball = Point::new(20, 10);
    let mut velocity = Point::new(1, 1);
    let mut spin = 0.0f64;

    loop {
        engine.process_input()?;
        if engine.key(codes::ESCAPE.into()).unwrap().pressed {
            break;
        }
        if engine.key(codes::LEFT.into()).unwrap().held {
            ball.x -= 1;
        }
        if engine.key(codes::RIGHT.into()).unwrap().held {
            ball.x += 1;
        }

        ball.x += velocity.x;
        ball.y += velocity.y;
        if ball.x <= 4 || ball.x >= i32::from(WIDTH) - 5 {
            velocity.x = -velocity.x;
        }
        if ball.y <= 4 || ball.y >= i32::from(HEIGHT) - 5 {
            velocity.y = -velocity.y;
        }
        spin += 2.0;

        engine.clear();
        engine.draw_border(Brush::default().with_color(Color::DARK_GREY));

        engine.draw_circle(ball, 3, Brush::default().with_color(Color::CYAN));
        engine.fill_triangle(
            Point::new(8, i32::from(HEIGHT) - 3),
            Point::new(14, i32::from(HEIGHT) - 9),
            Point::new(20, i32::from(HEIGHT) - 3),
            Brush::new(glyphs::MEDIUM_SHADE, Color::GREEN),
        );
        engine
            .draw_polygon(
                Point::new(i32::from(WIDTH) - 14, 9),
                6,
                6,
                spin,
                Brush::default().with_color(Color::MAGENTA),
            )
            .expect("hexagon has enough sides");

        let pointer = Point::new(engine.pointer_x(), engine.pointer_y());
        engine.draw_line(
            Point::new(pointer.x - 2, pointer.y),
            Point::new(pointer.x + 2, pointer.y),
            Brush::new('+', Color::YELLOW),
        );

        let held = engine.button(0).unwrap().held;
        engine.print_text_transparent(
            2,
            1,
            &format!("pointer {:>3},{:<3} {}", pointer.x, pointer.y, if held { "LMB" } else { "   " }),
            Color::WHITE,
        );

        engine.present()?;
        thread::sleep(Duration::from_millis(33));
    }
    Ok(())
}
