use std::env;
use std::fs;
use std::process;

use staffsketch::{
    compute_layout, demo_notes, layout_to_json, parse_notes_json, render_staff_to_svg, Frame,
    LayoutConfig, NoteDescriptor, RenderOptions, StaffNote,
};

const USAGE: &str = "Usage: staffsketch [--width W] [--height H] [--octaves MIN..MAX] [--json] \
[-o output] [notes.json [output]]
       staffsketch [options] --note F4:half [--note G4:whole]... [-o output]";

#[derive(Debug)]
struct Args {
    width: f64,
    height: f64,
    layout: LayoutConfig,
    json: bool,
    notes: Vec<StaffNote>,
    input_path: Option<String>,
    output_path: Option<String>,
}

#[derive(Debug)]
enum Command {
    Help,
    Run(Args),
}

/// Parse the command line (without the program name). Positionals are
/// resolved after every flag has been read: `[notes.json [output]]`, and
/// none at all when notes come from `--note`.
fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Command, String> {
    let mut args = Args {
        width: 1000.0,
        height: 500.0,
        layout: LayoutConfig::default(),
        json: false,
        notes: Vec::new(),
        input_path: None,
        output_path: None,
    };
    let mut positionals = Vec::new();

    let mut it = argv.into_iter();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--width" => {
                let v = value("--width")?;
                args.width = v.parse().map_err(|_| format!("bad width '{v}'"))?;
            }
            "--height" => {
                let v = value("--height")?;
                args.height = v.parse().map_err(|_| format!("bad height '{v}'"))?;
            }
            "--octaves" => {
                let v = value("--octaves")?;
                args.layout = LayoutConfig::parse_octaves(&v).map_err(|e| e.to_string())?;
            }
            "--json" => args.json = true,
            "--note" => {
                let v = value("--note")?;
                let note: NoteDescriptor =
                    v.parse().map_err(|e: staffsketch::Error| e.to_string())?;
                args.notes.push(StaffNote::new(note));
            }
            "-o" | "--output" => args.output_path = Some(value("--output")?),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option '{arg}'"));
            }
            _ => positionals.push(arg),
        }
    }

    let mut positionals = positionals.into_iter();
    if args.notes.is_empty() {
        args.input_path = positionals.next();
        if let Some(out) = positionals.next() {
            if args.output_path.is_some() {
                return Err("output given both with -o and as a positional argument".to_string());
            }
            args.output_path = Some(out);
        }
    }
    if let Some(extra) = positionals.next() {
        return Err(if args.notes.is_empty() {
            format!("unexpected argument '{extra}'")
        } else {
            format!("'{extra}': --note cannot be combined with a notes file; use -o for the output")
        });
    }

    if args.input_path.is_some() && args.input_path == args.output_path {
        return Err("output would overwrite the notes file".to_string());
    }
    Ok(Command::Run(args))
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let notes = match args.input_path.as_deref() {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match parse_notes_json(&source) {
                Ok(notes) => notes,
                Err(e) => {
                    eprintln!("Error parsing notes in '{}': {}", path, e);
                    process::exit(1);
                }
            }
        }
        None if args.notes.is_empty() => demo_notes(),
        None => args.notes,
    };

    let frame = Frame::new(args.width, args.height);
    let result = if args.json {
        compute_layout(frame, &notes, &args.layout).and_then(|layout| {
            for (note, reason) in layout.unsupported() {
                eprintln!("note {} ({}): {}", note.index, note.note, reason);
            }
            layout_to_json(&layout)
        })
    } else {
        let options = RenderOptions {
            layout: args.layout,
            ..RenderOptions::default()
        };
        render_staff_to_svg(frame, &notes, &options)
    };

    let out = match result {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match args.output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &out) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote {} to {}", if args.json { "layout" } else { "SVG" }, path);
        }
        None => {
            print!("{}", out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(argv: &[&str]) -> Result<Args, String> {
        match parse_args(argv.iter().map(|s| s.to_string()))? {
            Command::Run(args) => Ok(args),
            Command::Help => Err("help".to_string()),
        }
    }

    #[test]
    fn notes_file_and_output() {
        let args = run(&["notes.json", "staff.svg"]).unwrap();
        assert_eq!(args.input_path.as_deref(), Some("notes.json"));
        assert_eq!(args.output_path.as_deref(), Some("staff.svg"));
        assert!(args.notes.is_empty());
    }

    #[test]
    fn notes_file_before_note_flag_is_rejected() {
        let err = run(&["notes.json", "--note", "G4:whole"]).unwrap_err();
        assert!(err.contains("notes.json"), "{err}");

        let err = run(&["--note", "G4:whole", "notes.json"]).unwrap_err();
        assert!(err.contains("--note cannot be combined"), "{err}");
    }

    #[test]
    fn note_flags_write_to_explicit_output() {
        let args = run(&["--note", "F4:half", "--note", "g4:w", "-o", "out.svg"]).unwrap();
        assert_eq!(args.input_path, None);
        assert_eq!(args.output_path.as_deref(), Some("out.svg"));
        let notes: Vec<String> = args.notes.iter().map(|n| n.note.to_string()).collect();
        assert_eq!(notes, vec!["F4:half", "G4:whole"]);
    }

    #[test]
    fn output_never_overwrites_input() {
        assert!(run(&["notes.json", "-o", "notes.json"]).is_err());
        assert!(run(&["notes.json", "notes.json"]).is_err());
        assert!(run(&["notes.json", "a.svg", "-o", "b.svg"]).is_err());
    }

    #[test]
    fn flags_and_help() {
        let argv = ["--width", "640", "--height", "240", "--octaves", "3..5", "--json"];
        let args = run(&argv).unwrap();
        assert_eq!((args.width, args.height), (640.0, 240.0));
        assert_eq!(args.layout, LayoutConfig::with_octaves(3, 5).unwrap());
        assert!(args.json);

        assert!(matches!(parse_args(vec!["-h".to_string()]), Ok(Command::Help)));
        assert!(run(&["--width"]).is_err());
        assert!(run(&["--bogus"]).is_err());
        assert!(run(&["--octaves", "5..3"]).is_err());
    }
}
