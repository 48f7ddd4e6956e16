use cube_prefs::ColorPalette;
use cube_view::{NetSnapshot, net_face_at};
use owo_colors::OwoColorize;

/// Renders the net with each sticker as a block of background color.
pub(crate) fn ansi_net(net: &NetSnapshot, palette: &ColorPalette) -> String {
    let mut out = String::new();
    for net_row in 0..3 {
        for cell_row in 0..3 {
            let mut line = String::new();
            for net_col in 0..4 {
                let face = net_face_at(net_row, net_col);
                for cell_col in 0..3 {
                    match face.and_then(|f| net.cell(f, cell_row * 3 + cell_col)) {
                        Some(color) => {
                            let [r, g, b] = palette.get(color).rgb;
                            line += &"  ".on_truecolor(r, g, b).to_string();
                        }
                        None => line += "  ",
                    }
                }
                line.push(' ');
            }
            out += line.trim_end();
            out.push('\n');
        }
    }
    out
}
