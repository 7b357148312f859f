use edge_maze::display::{print_edge_grid, print_grid_header, Palette};
use edge_maze::{
    parse_script, CommandResult, EditorConfig, EditorSession, MazeError, MazeResult, PaintOutcome,
};
use log::{info, warn};
use std::io::{self, Read};
use std::path::Path;

fn show_help() {
    println!("maze_edit - author wall/edge mazes from a command script");
    println!();
    println!("Usage:");
    println!("  maze_edit [options] [script]      # read commands from script (stdin when omitted)");
    println!();
    println!("Options:");
    println!("  --config <file>    load editor configuration (JSON)");
    println!("  --grid <WxH>       grid size, e.g. 8x6");
    println!("  --cell <px>        cell size");
    println!("  --stroke <px>      stroke width");
    println!("  --no-dots          hide lattice dots");
    println!("  --out <file>       save the final export (default name: map.json)");
    println!();
    println!("Script commands:");
    println!("  build <WxH> [cell] [stroke]   down <x> <y> [pointer]   move <x> <y> [pointer]");
    println!("  up [pointer]   cancel [pointer]   toggle <h|v> <row> <col>");
    println!("  set <h|v> <row> <col> <on|off>   clear   invert   show   export   save [path]");
    println!();
    println!("Environment: MAZE_GRID_SIZE, MAZE_CELL_SIZE, MAZE_STROKE_WIDTH, MAZE_SHOW_DOTS, MAZE_EXPORT_FILE");
}

struct Options {
    config: EditorConfig,
    script: Option<String>,
    out: Option<String>,
}

fn parse_args(args: &[String]) -> MazeResult<Option<Options>> {
    let mut config = EditorConfig::from_env();
    let mut script = None;
    let mut out = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| MazeError::ConfigError(format!("{} needs a value", flag)))
        };
        match arg.as_str() {
            "help" | "-h" | "--help" => return Ok(None),
            "--config" => {
                let path = value("--config")?;
                config = EditorConfig::load_from_file(&path)?;
                info!("📄 Loaded configuration from {}", path);
            }
            "--grid" => config.grid.grid_size = value("--grid")?,
            "--cell" => config.grid.cell_size = value("--cell")?,
            "--stroke" => config.grid.stroke_width = value("--stroke")?,
            "--no-dots" => config.grid.show_dots = false,
            "--out" => out = Some(value("--out")?),
            other if other.starts_with("--") => {
                return Err(MazeError::ConfigError(format!("unknown option {}", other)))
            }
            other => script = Some(other.to_string()),
        }
    }

    config.validate()?;
    Ok(Some(Options {
        config,
        script,
        out,
    }))
}

fn read_script(path: Option<&str>) -> MazeResult<String> {
    match path {
        Some("-") | None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run(options: Options) -> MazeResult<()> {
    let Options {
        config,
        script,
        out,
    } = options;

    let mut session = EditorSession::from_input(&config.grid);
    let commands = parse_script(&read_script(script.as_deref())?)?;
    let palette = Palette::default();
    let mut stdout = io::stdout();

    for command in commands {
        match session.apply(command) {
            Ok(CommandResult::Render) => {
                print_grid_header(&mut stdout, session.grid())?;
                print_edge_grid(&mut stdout, session.grid(), session.show_dots(), &palette)?;
            }
            Ok(CommandResult::Exported(text)) => println!("{}", text),
            Ok(CommandResult::SaveRequested(path)) => {
                session.save_export(&config.export, path.as_deref().map(Path::new))?;
            }
            Ok(CommandResult::Painted(PaintOutcome::Ended)) => {
                info!("✏️ Gesture finished, {} walls on", session.grid().on_count())
            }
            Ok(_) => {}
            // bad coordinates in a script are reported but do not stop the run
            Err(e @ MazeError::InvalidEdge { .. }) => warn!("⚠️ {}", e),
            Err(e) => return Err(e),
        }
    }

    println!("{}", session.last_export());
    if let Some(path) = out {
        session.save_export(&config.export, Some(Path::new(&path)))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            show_help();
            return;
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("Run 'maze_edit --help' for usage information");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
