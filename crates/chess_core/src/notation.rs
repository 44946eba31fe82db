use crate::{movegen::Move, types::*};

/// Move-log entry: piece letter, `x` on captures, destination, `=Q` on
/// promotion, then `+` or `#`. Castling is written `0-0` / `0-0-0`.
pub(crate) fn describe(
    kind: PieceKind,
    from: Square,
    mv: &Move,
    promoted: bool,
    check: bool,
    mate: bool,
) -> String {
    let mut s = if mv.is_castle() {
        if mv.to.file() > from.file() {
            "0-0".to_string()
        } else {
            "0-0-0".to_string()
        }
    } else {
        let mut s = String::from(kind.letter());
        if mv.capture.is_some() {
            if kind == PieceKind::Pawn {
                s.push(from.file_char());
            }
            s.push('x');
        }
        s.push_str(&mv.to.to_string());
        if promoted {
            s.push_str("=Q");
        }
        s
    };
    if mate {
        s.push('#');
    } else if check {
        s.push('+');
    }
    s
}
