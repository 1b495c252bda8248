use bomber::{Board, DirectionSolver};

/// Drives a [`DirectionSolver`] over a line-oriented session.
///
/// Communication happens through stdin/stdout; stderr can be used for
/// logging. Every input line is one flattened board snapshot (the decoder
/// also accepts embedded newlines, so a transport may pass the raw
/// rectangular text through untouched). The reply is one direction per
/// snapshot. EOF or an empty line ends the session.
pub fn run(solver: &mut impl DirectionSolver) -> anyhow::Result<()> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut buf = String::new();

    loop {
        // Read the next line into buf
        buf.clear(); // because stdin.read_line() appends to the buffer
        use std::io::BufRead;
        let num_bytes_read = stdin.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the driver has exited.
            break Ok(());
        }
        let line = buf.trim_end();
        if line.is_empty() {
            break Ok(());
        }

        let board: Board = line.parse()?;
        let direction = solver.choose_direction(&board);

        use std::io::Write;
        writeln!(stdout, "{}", direction)?;
        stdout.flush()?;
    }
}
