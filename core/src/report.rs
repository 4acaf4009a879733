use analysis::PlyRecord;
use cozy_chess::Color;
use evaluation::Category;

/// One line per move, e.g.
/// `Blunder at move 12, ...Nf6?? +2.50 (p:20,c:250; depth=18). Engine suggests Nd5 (p:250,b:-30,d:18; Mistake vs engine).`
pub fn format_record(record: &PlyRecord) -> String {
    let san = match record.side_to_move {
        Color::White => record.san.clone(),
        Color::Black => format!("...{}", record.san),
    };

    let lead = match (record.category, record.announced_mate()) {
        (Category::Ok, Some((_, 0))) => "Checkmate".to_string(),
        (Category::Ok, Some((winner, moves))) => format!("{:?} mates in {}", winner, moves),
        (category, _) => category.to_string(),
    };

    let mut line = format!(
        "{} at move {}, {}{} {} (p:{},c:{}; depth={})",
        lead,
        record.move_number,
        san,
        record.category.glyph(),
        score_text(record),
        record.score_before,
        record.score_after,
        record.depth
    );

    if let (Some(best), Some(best_score)) = (record.best_move.as_deref(), record.best_score) {
        if !record.matches_best() {
            line.push_str(&format!(
                ". Engine suggests {} (p:{},b:{},d:{}",
                best, record.score_after, best_score, record.depth
            ));
            if let Some(category) = record.engine_category.filter(|c| *c != Category::Ok) {
                line.push_str(&format!("; {} vs engine", category));
            }
            line.push(')');
        }
    }
    line.push('.');

    line
}

/// Mates as `#+n` (White mates) or `#-n` (Black mates), otherwise pawns for White.
fn score_text(record: &PlyRecord) -> String {
    match record.announced_mate() {
        Some((_, 0)) => "#".to_string(),
        Some((Color::White, moves)) => format!("#+{}", moves),
        Some((Color::Black, moves)) => format!("#-{}", moves),
        None => format!("{:+.2}", record.score_after as f64 / 100.0),
    }
}

/// Flagged moves and mate announcements are always shown.
fn is_reported(record: &PlyRecord, all: bool) -> bool {
    all || record.category != Category::Ok
        || record.engine_category.is_some_and(|c| c != Category::Ok)
        || record.announced_mate().is_some()
}

/// Prints reported moves, or every move when `all` is set.
pub fn print(records: &[PlyRecord], all: bool) {
    for record in records.iter().filter(|r| is_reported(r, all)) {
        println!("{}", format_record(record));
    }
}
