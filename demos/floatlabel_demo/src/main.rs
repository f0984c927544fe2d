use std::time::Duration;

use floatlabel_core::{AttributeSet, Context, Parcel};
use floatlabel_ui::FloatLabelField;

const LAYOUT: &str = r##"<FloatLabelEditText
    android:id="@+id/email"
    android:hint="Email"
    app:gravity="start"
    app:textColorHintFocused="#FF0061A4"
    app:textColorHintUnFocused="#FF8A8A8A" />"##;

fn run_frames(field: &mut FloatLabelField) {
    while field.frame() {
        std::thread::sleep(Duration::from_millis(16));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let attrs = AttributeSet::parse(LAYOUT);
    let mut field = FloatLabelField::inflate(Some(&Context::default()), Some(&attrs)).with_id(1);
    field.on_label_animation(|a| log::info!("label animation: {}", a.resource_name()));

    println!("{}\n", field.render());

    field.focus();
    for ch in ["m", "e", "@"] {
        field.insert_text(ch);
    }
    run_frames(&mut field);
    println!("{}\n", field.render());

    let bytes = field.save_state()?.to_bytes()?;
    log::info!("saved {} bytes", bytes.len());

    field.blur();
    field.clear();
    run_frames(&mut field);
    println!("{}\n", field.render());

    field.restore_state(&Parcel::from_bytes(&bytes)?)?;
    println!("{}", field.render());
    println!("text after restore: {:?}", field.get_text());
    Ok(())
}
