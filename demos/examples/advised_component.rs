// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A component layer built on `understory_advice`.
//!
//! This example shows how a component framework can:
//! - define a component once, as a prototype method table,
//! - apply framework-wide advice to the prototype (an enabled guard and hit filtering),
//! - stamp out instances that each own a copy of the table,
//! - let an instance advise its own methods without affecting its siblings.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example advised_component`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_advice::{Advice, AdviceError, Advisable, MethodTable, TableOf};

#[derive(Debug, thiserror::Error)]
enum UiError {
    #[error(transparent)]
    Advice(#[from] AdviceError),
    #[error("component `{0}` is disabled")]
    Disabled(&'static str),
}

/// A push button. Its behavior lives in `methods`; the fields are its state.
struct Button {
    label: &'static str,
    bounds: Rect,
    enabled: bool,
    presses: u32,
    hovered: bool,
    methods: MethodTable<Self, Point, bool, UiError>,
}

impl Advisable for Button {
    type Args = Point;
    type Output = bool;
    type Error = UiError;

    fn method_table(&self) -> &TableOf<Self> {
        &self.methods
    }

    fn method_table_mut(&mut self) -> &mut TableOf<Self> {
        &mut self.methods
    }
}

/// A component definition: the prototype table every instance starts from.
struct Definition {
    prototype: TableOf<Button>,
}

impl Definition {
    fn button() -> Result<Self, AdviceError> {
        let mut prototype: TableOf<Button> = MethodTable::new();
        prototype.define("press", |b: &mut Button, _: &Point| {
            b.presses += 1;
            Ok(true)
        });
        prototype.define("hover", |b: &mut Button, _: &Point| {
            b.hovered = true;
            Ok(true)
        });

        // Pointer methods only run when the pointer is inside the component.
        prototype.around("press hover", |orig, b: &mut Button, pt: &Point| {
            if b.bounds.contains(*pt) {
                orig.call(b, pt)
            } else {
                Ok(false)
            }
        })?;

        // Disabled components reject pointer input outright.
        let guard = Advice::before(|b: &mut Button, _: &Point| {
            if b.enabled {
                Ok(())
            } else {
                Err(UiError::Disabled(b.label))
            }
        });
        prototype.advise("press hover", &guard)?;

        Ok(Self { prototype })
    }

    fn instantiate(&self, label: &'static str, bounds: Rect) -> Button {
        Button {
            label,
            bounds,
            enabled: true,
            presses: 0,
            hovered: false,
            methods: self.prototype.clone(),
        }
    }
}

fn main() -> Result<(), UiError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let definition = Definition::button()?;
    let mut ok = definition.instantiate("OK", Rect::new(0.0, 0.0, 80.0, 24.0));
    let mut cancel = definition.instantiate("Cancel", Rect::new(90.0, 0.0, 170.0, 24.0));

    // Instance-level advice: only the OK button logs its presses. A miss reports `false`.
    ok.around("press", |orig, b, pt| {
        let hit = orig.call(b, pt)?;
        if hit {
            tracing::info!(label = b.label, presses = b.presses, x = pt.x, y = pt.y, "pressed");
        } else {
            tracing::debug!(label = b.label, x = pt.x, y = pt.y, "press missed");
        }
        Ok(hit)
    })?;

    let inside_ok = Point::new(10.0, 10.0);
    let inside_cancel = Point::new(100.0, 10.0);

    assert!(ok.invoke("press", &inside_ok)?);
    assert!(!ok.invoke("press", &inside_cancel)?);
    assert!(cancel.invoke("press", &inside_cancel)?);
    assert!(cancel.invoke("hover", &inside_cancel)?);

    cancel.enabled = false;
    match cancel.invoke("press", &inside_cancel) {
        Err(UiError::Disabled(label)) => tracing::info!(label, "rejected while disabled"),
        other => tracing::warn!(?other, "expected a disabled error"),
    }

    match ok.invoke("scroll", &inside_ok) {
        Err(UiError::Advice(err)) => tracing::info!(%err, "no such method"),
        other => tracing::warn!(?other, "expected an unknown method"),
    }

    tracing::info!(
        ok_presses = ok.presses,
        cancel_presses = cancel.presses,
        cancel_hovered = cancel.hovered,
        "done"
    );
    Ok(())
}
