// Debug script to show indicator geometry and auto-scroll output

use ratatui::style::Color;
use tab_pager::ui::TriangleIndicator;

fn main() {
    // Args: width, visible tab count, child count (all optional)
    let mut args = std::env::args().skip(1);
    let width: u16 = args.next().and_then(|a| a.parse().ok()).unwrap_or(500);
    let count: u16 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let children: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(9);

    let mut indicator = TriangleIndicator::new(count, Color::White);
    indicator.resize(width);

    println!("=== GEOMETRY ===");
    println!("Container width: {}", width);
    println!("Visible tabs:    {}", indicator.visible_count());
    println!("Children:        {}", children);
    println!("Tab width:       {}", indicator.tab_width());
    let g = indicator.geometry();
    println!("Triangle base:   {}", g.base_width);
    println!("Triangle height: {}", g.height);
    println!("Initial offset:  {}", g.init_offset_x);
    println!("Path:            {:?}", indicator.triangle_path());
    println!();

    println!("=== SCROLL SWEEP ===");
    println!("{:>4} {:>7} {:>9} {:>9}", "page", "offset", "offset_x", "scroll_x");
    for step in 0..children.saturating_sub(1) * 4 + 1 {
        let page = step / 4;
        let offset = (step % 4) as f32 * 0.25;
        let frame = indicator.scroll(page, offset, children);
        let scroll = frame
            .scroll_x
            .map(|x| x.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>4} {:>7.2} {:>9} {:>9}", page, offset, frame.offset_x, scroll);
    }
}
