use super::common::{element, engine, format, offset, sized, subtree};
use boxlayout::style::{
  ComputedStyle, FlexDirection, LengthPercentage, LengthPercentageAuto, Overflow,
};
use boxlayout::{BoxArea, ElementTree, Point, Size};

const CB: Size = Size {
  width: 800.0,
  height: 600.0,
};

fn scroller() -> ComputedStyle {
  let mut style = sized(100.0, 100.0);
  style.set_padding(LengthPercentage::px(10.0));
  style.overflow_y = Overflow::Scroll;
  style
}

fn tall_content(height: f32) -> ComputedStyle {
  ComputedStyle {
    flex_shrink: 0.0,
    ..sized(100.0, height)
  }
}

#[test]
fn overflow_covers_children_from_padding_origin() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(scroller());
  let content = elements.create_element(tall_content(200.0));
  elements.append_child(root, content).unwrap();

  format(&engine(), &mut elements, root, CB);

  let root_element = element(&elements, root);
  assert_eq!(root_element.client_size(), Size::new(120.0, 120.0));
  // Trailing padding is not part of the overflow
  assert_eq!(root_element.scrollable_overflow(), Size::new(120.0, 210.0));
}

#[test]
fn scroll_offset_is_clamped_after_each_pass() {
  let engine = engine();
  let mut elements = ElementTree::new();
  let root = elements.create_element(scroller());
  let content = elements.create_element(tall_content(200.0));
  elements.append_child(root, content).unwrap();
  elements
    .set_scroll_offset(root, Point::new(40.0, 500.0))
    .unwrap();

  format(&engine, &mut elements, root, CB);
  assert_eq!(element(&elements, root).scroll_offset(), Point::new(0.0, 90.0));

  elements.set_style(content, tall_content(50.0)).unwrap();
  format(&engine, &mut elements, root, CB);
  assert_eq!(element(&elements, root).scroll_offset(), Point::ZERO);
}

#[test]
fn negative_scroll_offset_clamps_to_zero() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(scroller());
  elements
    .set_scroll_offset(root, Point::new(-15.0, -3.0))
    .unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(element(&elements, root).scroll_offset(), Point::ZERO);
}

#[test]
fn descendants_are_clamped_too() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(300.0, 300.0));
  let inner = elements.create_element(ComputedStyle {
    flex_shrink: 0.0,
    ..scroller()
  });
  let content = elements.create_element(tall_content(130.0));
  elements.append_child(root, inner).unwrap();
  elements.append_child(inner, content).unwrap();
  elements
    .set_scroll_offset(inner, Point::new(0.0, 100.0))
    .unwrap();

  format(&engine(), &mut elements, root, CB);

  // 10 + 130 - 120
  assert_eq!(element(&elements, inner).scroll_offset(), Point::new(0.0, 20.0));
}

#[test]
fn scroll_offset_shifts_absolute_offsets() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(scroller());
  let content = elements.create_element(tall_content(200.0));
  elements.append_child(root, content).unwrap();
  elements
    .set_scroll_offset(root, Point::new(0.0, 30.0))
    .unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, content), Point::new(10.0, 10.0));
  assert_eq!(
    elements.absolute_offset(content, BoxArea::Border),
    Some(Point::new(10.0, -20.0))
  );
}

#[test]
fn only_direct_children_contribute() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(100.0, 100.0));
  let child = elements.create_element(ComputedStyle {
    flex_shrink: 0.0,
    ..sized(50.0, 50.0)
  });
  let grandchild = elements.create_element(ComputedStyle {
    flex_shrink: 0.0,
    ..sized(300.0, 300.0)
  });
  elements.append_child(root, child).unwrap();
  elements.append_child(child, grandchild).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(element(&elements, child).scrollable_overflow(), Size::new(300.0, 300.0));
  assert_eq!(element(&elements, root).scrollable_overflow(), Size::new(100.0, 100.0));
}

#[test]
fn negative_margins_do_not_shrink_overflow() {
  let mut elements = ElementTree::new();
  let root = elements.create_element(sized(100.0, 100.0));
  let child = elements.create_element(ComputedStyle {
    margin_left: LengthPercentageAuto::px(-20.0),
    margin_top: LengthPercentageAuto::px(-20.0),
    ..sized(50.0, 50.0)
  });
  elements.append_child(root, child).unwrap();

  format(&engine(), &mut elements, root, CB);

  assert_eq!(offset(&elements, child), Point::new(-20.0, -20.0));
  assert_eq!(element(&elements, root).scrollable_overflow(), Size::new(100.0, 100.0));
}

#[test]
fn overflow_never_smaller_than_padding_box() {
  let mut elements = ElementTree::new();
  let mut root_style = ComputedStyle {
    flex_direction: FlexDirection::Column,
    ..sized(240.0, 180.0)
  };
  root_style.set_padding(LengthPercentage::px(6.0));
  root_style.set_border_width(2.0);
  let root = elements.create_element(root_style);
  for height in [40.0, 90.0, 10.0] {
    let mut style = ComputedStyle {
      flex_shrink: 0.0,
      height: LengthPercentageAuto::px(height),
      ..ComputedStyle::default()
    };
    style.set_padding(LengthPercentage::px(3.0));
    let row = elements.create_element(style);
    elements.append_child(root, row).unwrap();
    for width in [30.0, 500.0] {
      let leaf = elements.create_element(ComputedStyle {
        flex_shrink: 0.0,
        ..sized(width, 12.0)
      });
      elements.append_child(row, leaf).unwrap();
    }
  }

  format(&engine(), &mut elements, root, CB);

  for id in subtree(&elements, root) {
    let e = element(&elements, id);
    let padding = e.layout_box().size(BoxArea::Padding);
    let overflow = e.scrollable_overflow();
    assert!(
      overflow.width >= padding.width && overflow.height >= padding.height,
      "{}: {:?} < {:?}",
      elements.debug_name(id),
      overflow,
      padding
    );
  }
  // Leaves spill out of the rows, which only widens the rows' own overflow
  assert_eq!(
    element(&elements, root).scrollable_overflow(),
    Size::new(252.0, 192.0)
  );
}
