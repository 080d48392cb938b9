//! 标签布局计算模块
//!
//! 该模块实现全部“坐标算术”，提供三种布局：
//!
//! 1. **仅名字** (`name_only`)：名字在画布正中。
//! 2. **名字 + 图标** (`name_with_icon`)：图标靠左，名字在图标右侧。
//! 3. **纵向图案** (`vertical_pattern`)：双图案模式下的半幅布局，图标在上、名字在下。
//!
//! # 设计思路
//!
//! - 算法纯函数化：输入为画布/区域尺寸，输出唯一坐标，便于测试。
//! - 整数坐标一律使用整数除法，文字坐标使用浮点，和绘制层的亚像素定位一致。
//! - 图标永远拉伸为正方形（X/Y 独立缩放），不做等比留白。

/// SUZURI 推荐的标签宽度（像素）
pub const LABEL_WIDTH: u32 = 1181;
/// SUZURI 推荐的标签高度（像素）
pub const LABEL_HEIGHT: u32 = 425;

/// 单图案模式字号（pt，72 DPI 下等于像素）
pub const NAME_FONT_SIZE: f32 = 120.0;
/// 双图案模式字号
pub const PATTERN_FONT_SIZE: f32 = 70.0;
/// 文字颜色（深灰，不透明）
pub const TEXT_COLOR: [u8; 4] = [60, 60, 60, 255];

/// 单图案模式下图标边长占画布高度的比例
pub const ICON_RATIO: f64 = 0.8;
/// 双图案模式下图标边长占画布高度的比例
pub const PATTERN_ICON_RATIO: f64 = 0.75;
/// 图标与名字之间的水平间距
pub const ICON_TEXT_GAP: u32 = 50;
/// 双图案模式下图标底部到名字基线的距离
pub const PATTERN_TEXT_GAP: u32 = 55;
/// 双图案模式下图标距顶部的比例
pub const PATTERN_TOP_RATIO: f64 = 0.05;

/// 文字锚点。
///
/// 绘制时笔的起点为 `(x - ax * w, y + ay * h)`，其中 `w` 为字符串前进宽度，
/// `h` 为字号的 72/96，得到的 `y` 即基线。
/// 因此 `ay = 0` 表示给定的 `y` 本身就是基线。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    /// 水平、垂直都居中
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
    /// 左对齐、垂直居中
    pub const LEFT_MIDDLE: Anchor = Anchor { x: 0.0, y: 0.5 };
    /// 水平居中、`y` 为基线
    pub const BASELINE_CENTER: Anchor = Anchor { x: 0.5, y: 0.0 };
}

/// 图标的放置位置与边长。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPlacement {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// 文字的锚点坐标与字号。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
    pub font_size: f32,
}

/// 一个图案（整幅或半幅）的完整布局。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternLayout {
    pub icon: Option<IconPlacement>,
    pub text: TextPlacement,
}

/// 图标目标边长：`round(height * ratio)`，与原图宽高比无关。
pub fn icon_size(height: u32, ratio: f64) -> u32 {
    (height as f64 * ratio).round() as u32
}

/// 仅名字：名字在画布正中。
pub fn name_only(width: u32, height: u32) -> PatternLayout {
    PatternLayout {
        icon: None,
        text: TextPlacement {
            x: width as f32 / 2.0,
            y: height as f32 / 2.0,
            anchor: Anchor::CENTER,
            font_size: NAME_FONT_SIZE,
        },
    }
}

/// 名字 + 图标：图标左边距为 `height / 10`，垂直居中；名字紧随其后。
pub fn name_with_icon(height: u32) -> PatternLayout {
    let size = icon_size(height, ICON_RATIO);
    let x = (height / 10) as i32;
    // 图标比画布还高时会出现负偏移，允许其被裁剪
    let y = (height as i32 - size as i32) / 2;

    PatternLayout {
        icon: Some(IconPlacement { x, y, size }),
        text: TextPlacement {
            x: (x + size as i32 + ICON_TEXT_GAP as i32) as f32,
            y: height as f32 / 2.0,
            anchor: Anchor::LEFT_MIDDLE,
            font_size: NAME_FONT_SIZE,
        },
    }
}

/// 纵向图案：在 `[offset_x, offset_x + area_width)` 区域内布局。
///
/// - 有图标：图标水平居中、距顶部 5%，名字基线在图标下方 55px。
/// - 无图标：名字在区域内两轴居中。
pub fn vertical_pattern(offset_x: u32, area_width: u32, height: u32, has_icon: bool) -> PatternLayout {
    let center_x = offset_x as f32 + area_width as f32 / 2.0;

    if !has_icon {
        return PatternLayout {
            icon: None,
            text: TextPlacement {
                x: center_x,
                y: height as f32 / 2.0,
                anchor: Anchor::CENTER,
                font_size: PATTERN_FONT_SIZE,
            },
        };
    }

    let size = icon_size(height, PATTERN_ICON_RATIO);
    let x = offset_x as i32 + (area_width as i32 - size as i32) / 2;
    let y = (height as f64 * PATTERN_TOP_RATIO) as i32;

    PatternLayout {
        icon: Some(IconPlacement { x, y, size }),
        text: TextPlacement {
            x: center_x,
            y: (y + size as i32 + PATTERN_TEXT_GAP as i32) as f32,
            anchor: Anchor::BASELINE_CENTER,
            font_size: PATTERN_FONT_SIZE,
        },
    }
}

/// 将画布按宽度二分，返回 `[(offset, width); 2]`。
///
/// 奇数宽度时多出的一列归右侧。
pub fn split_halves(width: u32) -> [(u32, u32); 2] {
    let half = width / 2;
    [(0, half), (half, width - half)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_name_only_centers_on_default_label() {
        let layout = name_only(LABEL_WIDTH, LABEL_HEIGHT);

        assert!(layout.icon.is_none());
        assert_eq!(layout.text.x, 590.5);
        assert_eq!(layout.text.y, 212.5);
        assert_eq!(layout.text.anchor, Anchor::CENTER);
        assert_eq!(layout.text.font_size, 120.0);
    }

    #[test]
    fn test_name_with_icon_on_default_label() {
        let layout = name_with_icon(LABEL_HEIGHT);
        let icon = layout.icon.expect("icon placement expected");

        assert_eq!(icon, IconPlacement { x: 42, y: 42, size: 340 });
        // 42 + 340 + 50
        assert_eq!(layout.text.x, 432.0);
        assert_eq!(layout.text.y, 212.5);
        assert_eq!(layout.text.anchor, Anchor::LEFT_MIDDLE);
    }

    #[test]
    fn test_vertical_pattern_with_icon_on_left_half() {
        let [(offset, width), _] = split_halves(LABEL_WIDTH);
        let layout = vertical_pattern(offset, width, LABEL_HEIGHT, true);
        let icon = layout.icon.expect("icon placement expected");

        // round(425 * 0.75) = 319, floor(425 * 0.05) = 21
        assert_eq!(icon.size, 319);
        assert_eq!(icon.x, (590 - 319) / 2);
        assert_eq!(icon.y, 21);
        assert_eq!(layout.text.x, 295.0);
        assert_eq!(layout.text.y, (21 + 319 + 55) as f32);
        assert_eq!(layout.text.anchor, Anchor::BASELINE_CENTER);
        assert_eq!(layout.text.font_size, 70.0);
    }

    #[test]
    fn test_vertical_pattern_without_icon_centers_in_right_half() {
        let [_, (offset, width)] = split_halves(LABEL_WIDTH);
        let layout = vertical_pattern(offset, width, LABEL_HEIGHT, false);

        assert!(layout.icon.is_none());
        assert_eq!(layout.text.x, 590.0 + 591.0 / 2.0);
        assert_eq!(layout.text.y, 212.5);
        assert_eq!(layout.text.anchor, Anchor::CENTER);
    }

    #[test]
    fn test_split_halves_gives_extra_column_to_right() {
        assert_eq!(split_halves(1181), [(0, 590), (590, 591)]);
        assert_eq!(split_halves(1000), [(0, 500), (500, 500)]);
    }

    #[test]
    fn test_tiny_canvas_keeps_icon_at_origin() {
        // round(1 * 0.8) = 1
        let layout = name_with_icon(1);
        let icon = layout.icon.expect("icon placement expected");
        assert_eq!(icon.size, 1);
        assert_eq!(icon.x, 0);
        assert_eq!(icon.y, 0);
    }

    proptest! {
        #[test]
        fn prop_single_icon_is_square_fraction_of_height(height in 1u32..5000) {
            let icon = name_with_icon(height).icon.expect("icon placement expected");

            prop_assert_eq!(icon.size, (height as f64 * 0.8).round() as u32);
            prop_assert_eq!(icon.x, (height / 10) as i32);
            prop_assert_eq!(icon.y, (height as i32 - icon.size as i32) / 2);
        }

        #[test]
        fn prop_pattern_icon_stays_inside_its_half(width in 2u32..5000, height in 1u32..2000) {
            for (offset, area) in split_halves(width) {
                let layout = vertical_pattern(offset, area, height, true);
                let icon = layout.icon.expect("icon placement expected");

                prop_assert_eq!(icon.size, (height as f64 * 0.75).round() as u32);
                if icon.size <= area {
                    prop_assert!(icon.x >= offset as i32);
                    prop_assert!(icon.x as u32 + icon.size <= offset + area);
                }
            }
        }

        #[test]
        fn prop_halves_cover_full_width(width in 0u32..10_000) {
            let [(left_offset, left), (right_offset, right)] = split_halves(width);

            prop_assert_eq!(left_offset, 0);
            prop_assert_eq!(right_offset, width / 2);
            prop_assert_eq!(left + right, width);
        }
    }
}
