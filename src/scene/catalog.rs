//! The six OceanCare paper-prototype screens.
//!
//! Three usability tasks, two screens each: find and join a cleanup event, report beach debris,
//! donate to a campaign. Every screen draws the phone frame on the left half of the canvas and
//! task annotations on the right half.

use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::PaperResult;
use crate::scene::dsl::{ScreenBuilder, stroke};
use crate::scene::model::{Screen, ScreenSet};

/// Paper color before texture noise.
pub const PAPER_TINT: Rgb8 = Rgb8::new(245, 242, 235);

const FRAME: Rgb8 = Rgb8::new(100, 100, 100);
const BLUE: Rgb8 = Rgb8::new(0, 102, 204);
const BLUE_FILL: Rgb8 = Rgb8::new(200, 220, 255);
const GREEN: Rgb8 = Rgb8::new(0, 150, 0);
const GREEN_FILL: Rgb8 = Rgb8::new(200, 255, 200);
const GREY: Rgb8 = Rgb8::new(102, 102, 102);
const LIGHT_GREY: Rgb8 = Rgb8::new(150, 150, 150);
const FADED: Rgb8 = Rgb8::new(200, 200, 200);
const DARK: Rgb8 = Rgb8::new(50, 50, 50);
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
const RED: Rgb8 = Rgb8::new(200, 0, 0);
const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const PANEL: Rgb8 = Rgb8::new(240, 240, 240);

/// Left edge of the annotation column.
const NOTE_X: i32 = 520;

/// The full OceanCare set on a 1200×800 canvas.
pub fn oceancare_screens() -> PaperResult<ScreenSet> {
    let set = ScreenSet {
        canvas: CanvasSize::default(),
        background: PAPER_TINT,
        screens: vec![
            home_screen()?,
            events_confirmation()?,
            report_form_blank()?,
            report_form_filled()?,
            donate_screen()?,
            thank_you_popup()?,
        ],
    };
    set.validate()?;
    Ok(set)
}

/// Phone outline plus app name and screen heading.
fn phone(b: ScreenBuilder, heading: &str) -> ScreenBuilder {
    b.outline_rect((50, 40), (450, 760), FRAME, 3)
        .text((60, 60), "OceanCare App", BLUE)
        .text((60, 90), heading, GREY)
}

/// Annotation lines stacked at a fixed pitch starting at `y`.
fn notes(mut b: ScreenBuilder, y: i32, pitch: i32, lines: &[(&str, Rgb8)]) -> ScreenBuilder {
    for (i, (text, color)) in lines.iter().enumerate() {
        b = b.text((NOTE_X, y + pitch * i as i32), *text, *color);
    }
    b
}

/// Drop shadow, white card and border of an overlay cut-out.
fn popup(b: ScreenBuilder, x: i32, y: i32, w: i32, h: i32) -> ScreenBuilder {
    b.rect((x + 5, y + 5), (x + w + 5, y + h + 5), None, Some(FADED))
        .rect((x, y), (x + w, y + h), Some(stroke(DARK, 3)), Some(WHITE))
}

fn home_screen() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("home", "prototype_1_home_screen.png")
        .title("Task 1 start: home screen with Find Events");
    let b = phone(b, "HOME SCREEN");

    // Bottom navigation bar.
    let b = b
        .outline_rect((60, 700), (440, 750), FRAME, 2)
        .text((80, 710), "Home", BLUE)
        .text((200, 710), "Events", GREY)
        .text((340, 710), "Profile", GREY);

    let (x, w, h) = (70, 320, 80);
    let mut y = 150;
    let mut b = b
        .rect((x, y), (x + w, y + h), Some(stroke(BLUE, 3)), Some(BLUE_FILL))
        .text((x + 20, y + 20), "FIND EVENTS", BLUE)
        .text((x + 20, y + 50), "[User taps here]", RED);

    for (label, hint) in [
        ("Report Issue", "Help protect oceans"),
        ("Donate", "Support our mission"),
    ] {
        y += 120;
        b = b
            .outline_rect((x, y), (x + w, y + h), GREY, 2)
            .text((x + 20, y + 20), label, GREY)
            .text((x + 20, y + 50), hint, LIGHT_GREY);
    }

    let b = notes(
        b,
        100,
        30,
        &[
            ("USER: Alex (Volunteer)", BLUE),
            ("Goal: Find beach cleanup", GREY),
            ("events nearby", GREY),
        ],
    );
    let b = notes(
        b,
        250,
        30,
        &[
            ("TASK 1 - STEP 1:", BLACK),
            ("Home Screen", GREY),
            ("User sees navigation menu", GREY),
            ("with 'Find Events' option", GREY),
        ],
    );
    b.text((420, 190), "→", RED).build()
}

fn events_confirmation() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("events", "prototype_2_events_confirmation.png")
        .title("Task 1 end: event list with confirmation pop-up");
    let b = phone(b, "CLEANUP EVENTS");

    let ey = 140;
    let b = b
        .outline_rect((70, ey), (430, ey + 70), GREY, 1)
        .text((80, ey + 10), "Ocean Beach Cleanup", BLUE)
        .text((80, ey + 35), "Saturday 2PM • 15 volunteers", GREY)
        .text((350, ey + 25), "[JOIN]", GREEN);

    let (px, py) = (130, 180);
    let b = popup(b, px, py, 280, 200)
        .text((px + 20, py + 20), "CONFIRM REGISTRATION", BLUE)
        .text((px + 20, py + 50), "Join Ocean Beach", DARK)
        .text((px + 20, py + 70), "Cleanup?", DARK)
        .rect(
            (px + 20, py + 110),
            (px + 130, py + 150),
            Some(stroke(BLUE, 2)),
            Some(BLUE_FILL),
        )
        .text((px + 35, py + 120), "Confirm", BLUE)
        .outline_rect((px + 150, py + 110), (px + 260, py + 150), GREY, 2)
        .text((px + 165, py + 120), "Cancel", GREY);

    let b = notes(
        b,
        100,
        30,
        &[
            ("TASK 1 - STEP 2:", BLACK),
            ("Events Screen", GREY),
            ("User selects event and", GREY),
            ("paper pop-up appears", GREY),
            ("(separate paper cutout)", RED),
        ],
    );
    let b = notes(
        b,
        280,
        30,
        &[
            ("User action:", BLACK),
            ("- User taps 'Join'", GREY),
            ("- Pop-up placed on top", GREY),
            ("- User confirms registration", GREY),
        ],
    );
    b.text((480, 350), "pop-up", RED)
        .text((470, 370), "overlay", RED)
        .build()
}

const FORM_X: i32 = 70;

/// Grey photo placeholder at the top of both report forms.
fn photo_box(b: ScreenBuilder) -> ScreenBuilder {
    b.rect(
        (FORM_X, 140),
        (FORM_X + 360, 240),
        Some(stroke(GREY, 2)),
        Some(PANEL),
    )
}

/// Location label, input box and its content.
fn location_field(b: ScreenBuilder, value: &str, color: Rgb8) -> ScreenBuilder {
    b.text((FORM_X, 270), "Location:", DARK)
        .rect(
            (FORM_X, 295),
            (FORM_X + 360, 320),
            Some(stroke(GREY, 1)),
            Some(WHITE),
        )
        .text((FORM_X + 10, 300), value, color)
}

/// Description label, input box and its lines, each at its own offset below the box top.
fn description_field(b: ScreenBuilder, lines: &[(i32, &str)], color: Rgb8) -> ScreenBuilder {
    let mut b = b.text((FORM_X, 350), "Description:", DARK).rect(
        (FORM_X, 375),
        (FORM_X + 360, 450),
        Some(stroke(GREY, 1)),
        Some(WHITE),
    );
    for (dy, line) in lines {
        b = b.text((FORM_X + 10, 350 + dy), *line, color);
    }
    b
}

fn report_form_blank() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("report-blank", "prototype_3_report_form_blank.png")
        .title("Task 2 start: blank report form");
    let b = photo_box(phone(b, "REPORT ISSUE")).text(
        (FORM_X + 100, 175),
        "[TAP TO ADD PHOTO]",
        GREY,
    );
    let b = location_field(b, "GPS: _____________", LIGHT_GREY);
    let b = description_field(b, &[(30, "[User writes here]")], LIGHT_GREY)
        .rect(
            (FORM_X, 470),
            (FORM_X + 360, 520),
            Some(stroke(BLUE, 2)),
            Some(BLUE_FILL),
        )
        .text((FORM_X + 120, 485), "SUBMIT REPORT", BLUE);

    let b = notes(
        b,
        100,
        30,
        &[
            ("USER: Maria (Concerned)", BLUE),
            ("Goal: Report beach debris", GREY),
        ],
    );
    let b = notes(
        b,
        200,
        30,
        &[
            ("TASK 2 - STEP 1:", BLACK),
            ("Blank Report Form", GREY),
            ("User navigates to", GREY),
            ("Report Issue screen", GREY),
        ],
    );
    notes(
        b,
        350,
        30,
        &[
            ("Interactive elements:", BLACK),
            ("- Photo upload area", GREY),
            ("- Location input (GPS)", GREY),
            ("- Text description box", GREY),
            ("- Submit button", GREY),
        ],
    )
    .build()
}

fn report_form_filled() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("report-filled", "prototype_4_report_form_filled.png")
        .title("Task 2 end: completed report with debris sketch");
    let b = photo_box(phone(b, "REPORT ISSUE"));

    // Trash sketch inside the photo box: a lid and three slats.
    let (tx, ty) = (FORM_X + 120, 170);
    let b = b
        .line((tx, ty), (tx + 40, ty), DARK, 2)
        .line((tx + 5, ty), (tx + 5, ty + 30), DARK, 2)
        .line((tx + 20, ty), (tx + 20, ty + 30), DARK, 2)
        .line((tx + 35, ty), (tx + 35, ty + 30), DARK, 2)
        .text((tx + 50, ty + 10), "Plastic", DARK);

    let b = location_field(b, "Sandy Beach, CA (37.5°N)", DARK);
    let b = description_field(
        b,
        &[
            (30, "Large pile of plastic"),
            (55, "bags and bottles."),
            (75, "~50 pieces"),
        ],
        DARK,
    )
    .rect(
        (FORM_X, 470),
        (FORM_X + 360, 520),
        Some(stroke(GREEN, 3)),
        Some(GREEN_FILL),
    )
    .text((FORM_X + 100, 485), "SUBMIT REPORT", GREEN);

    let b = notes(
        b,
        100,
        30,
        &[
            ("TASK 2 - STEP 2:", BLACK),
            ("Form Completed", GREY),
            ("User fills in all fields:", GREY),
        ],
    );
    let b = notes(
        b,
        200,
        30,
        &[
            ("- Photo: (trash sketch)", GREY),
            ("- Location: Sandy Beach", GREY),
            ("- Description: ~50 pieces", GREY),
        ],
    );
    notes(
        b,
        320,
        30,
        &[
            ("User action:", BLACK),
            ("- Taps 'Submit Report'", GREY),
            ("- Form validates & sends", GREY),
            ("- Success confirmation", GREEN),
        ],
    )
    .build()
}

fn donate_screen() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("donate", "prototype_5_donate_screen.png")
        .title("Task 3 start: donation screen with $20 selected");
    let mut b = phone(b, "DONATE")
        .text((70, 130), "Save the Turtles Campaign", BLUE)
        .text((70, 155), "Help rescue marine life", GREY);

    for (i, amount) in ["$5", "$10", "$20", "$50"].into_iter().enumerate() {
        let y = 210 + 90 * i as i32;
        b = if amount == "$20" {
            b.rect((70, y), (380, y + 60), Some(stroke(GREEN, 3)), Some(GREEN_FILL))
                .text((100, y + 15), amount, GREEN)
                .text((150, y + 15), "← SELECTED", GREEN)
        } else {
            b.outline_rect((70, y), (380, y + 60), GREY, 2)
                .text((100, y + 15), amount, GREY)
        };
    }

    let dy = 595;
    let b = b
        .rect((70, dy), (380, dy + 60), Some(stroke(BLUE, 2)), Some(BLUE_FILL))
        .text((130, dy + 15), "DONATE NOW", BLUE);

    let b = notes(
        b,
        100,
        30,
        &[
            ("USER: John (Donor)", BLUE),
            ("Goal: Donate $20 to", GREY),
            ("turtle conservation", GREY),
        ],
    );
    let b = notes(
        b,
        220,
        30,
        &[
            ("TASK 3 - STEP 1:", BLACK),
            ("Donation Screen", GREY),
            ("User selects amount:", GREY),
            ("- $5, $10, $20, $50", GREY),
        ],
    );
    notes(
        b,
        360,
        30,
        &[
            ("User action:", BLACK),
            ("- Taps $20 (highlighted)", GREY),
            ("- Button shows selection", GREY),
            ("- Ready to donate", GREY),
        ],
    )
    .build()
}

fn thank_you_popup() -> PaperResult<Screen> {
    let b = ScreenBuilder::new("thank-you", "prototype_6_thank_you_popup.png")
        .title("Task 3 end: thank-you pop-up over the donation screen");

    // Faded donation screen underneath the cut-out.
    let b = phone(b, "DONATE")
        .text((70, 130), "Save the Turtles Campaign", FADED)
        .rect((70, 210), (380, 270), Some(stroke(FADED, 2)), Some(PANEL))
        .text((100, 220), "$20  ✓", FADED);

    let (px, py) = (120, 230);
    let b = popup(b, px, py, 260, 220)
        .text((px + 30, py + 20), "THANK YOU!", GREEN)
        .text((px + 20, py + 55), "Your $20 donation", DARK)
        .text((px + 20, py + 75), "has been received!", DARK)
        .text((px + 20, py + 110), "Impact: Saves 5 sea", GREY)
        .text((px + 20, py + 130), "turtles from plastic", GREY)
        .rect(
            (px + 35, py + 155),
            (px + 225, py + 190),
            Some(stroke(BLUE, 2)),
            Some(BLUE_FILL),
        )
        .text((px + 65, py + 162), "Done", BLUE);

    let b = notes(
        b,
        100,
        30,
        &[
            ("TASK 3 - STEP 2:", BLACK),
            ("Confirmation Pop-up", GREY),
            ("User taps 'Donate Now'", GREY),
            ("and pop-up appears", GREY),
            ("(separate paper cutout)", RED),
        ],
    );
    let b = notes(
        b,
        280,
        30,
        &[
            ("Pop-up shows:", BLACK),
            ("- Donation confirmation", GREY),
            ("- Impact message", GREY),
            ("- 'Done' button to close", GREY),
        ],
    );
    notes(
        b,
        420,
        30,
        &[
            ("Result: User confirms", GREEN),
            ("donation complete", GREEN),
        ],
    )
    .build()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
