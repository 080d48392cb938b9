//! # 内置素材
//!
//! 默认模板与示例图标都在内存中按固定参数绘制，不依赖磁盘上的素材文件。
//! 模板：米白底 + 2px 浅灰边框（上下左右）。
//! 示例图标：透明底、浅蓝实心圆、白色五角星（非零环绕规则填充）。

use std::f64::consts::PI;

use image::{ImageBuffer, Rgba, RgbaImage};

use super::layout::{LABEL_HEIGHT, LABEL_WIDTH};

const TEMPLATE_BACKGROUND: Rgba<u8> = Rgba([250, 250, 248, 255]);
const TEMPLATE_BORDER: Rgba<u8> = Rgba([200, 200, 200, 255]);
const TEMPLATE_BORDER_WIDTH: u32 = 2;

const ICON_CIRCLE: Rgba<u8> = Rgba([100, 200, 255, 255]);
const ICON_STAR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const ICON_CIRCLE_INSET: f64 = 10.0;

/// 绘制内置默认模板（1181×425）。
pub fn render_default_template() -> RgbaImage {
    let b = TEMPLATE_BORDER_WIDTH;

    ImageBuffer::from_fn(LABEL_WIDTH, LABEL_HEIGHT, |x, y| {
        let on_border = x < b || y < b || x >= LABEL_WIDTH - b || y >= LABEL_HEIGHT - b;
        if on_border {
            TEMPLATE_BORDER
        } else {
            TEMPLATE_BACKGROUND
        }
    })
}

/// 绘制 `size × size` 的示例图标。
pub fn render_sample_icon(size: u32) -> RgbaImage {
    let center = size as f64 / 2.0;
    let radius = (center - ICON_CIRCLE_INSET).max(0.0);
    let star = star_polygon(center, center, size as f64 / 4.0);

    ImageBuffer::from_fn(size, size, |x, y| {
        // 像素中心采样
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;

        if winding_number(&star, px, py) != 0 {
            ICON_STAR
        } else if (px - center).powi(2) + (py - center).powi(2) <= radius * radius {
            ICON_CIRCLE
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// 五角星顶点：每次旋转 4π/5，从正上方开始。
fn star_polygon(cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    (0..5)
        .map(|i| {
            let angle = i as f64 * 4.0 * PI / 5.0 - PI / 2.0;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// 点相对闭合多边形的环绕数。
fn winding_number(polygon: &[(f64, f64)], px: f64, py: f64) -> i32 {
    let mut winding = 0;

    for (i, &(x0, y0)) in polygon.iter().enumerate() {
        let (x1, y1) = polygon[(i + 1) % polygon.len()];
        let cross = (x1 - x0) * (py - y0) - (px - x0) * (y1 - y0);

        if y0 <= py {
            if y1 > py && cross > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross < 0.0 {
            winding -= 1;
        }
    }

    winding
}
