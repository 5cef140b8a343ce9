//! Rules the interactivity layer relies on, injected once into `<head>`.

use web_sys::Document;

pub const STYLE_ELEMENT_ID: &str = "portfolio-injected";

pub const INJECTED_CSS: &str = r#"
.nav-menu.active {
  display: flex;
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  flex-direction: column;
  padding: 1rem 0;
  border-top: 1px solid var(--border-color);
}

[data-theme="dark"] .nav-menu.active {
  background: rgba(15, 23, 42, 0.95);
}

.nav-menu.active .nav-link {
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--border-color);
}

.nav-menu.active .nav-link:last-child {
  border-bottom: none;
}

.animate-in {
  animation: fadeInUp 0.8s ease-out forwards;
}

@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@media (min-width: 769px) {
  .nav-menu.active {
    position: static;
    display: flex !important;
    flex-direction: row;
    background: transparent;
    backdrop-filter: none;
    padding: 0;
    border-top: none;
  }

  .nav-menu.active .nav-link {
    padding: 0;
    border-bottom: none;
  }
}
"#;

/// Inline styles of the notification toast, applied in order.
pub const NOTIFICATION_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "1rem 2rem"),
    ("border-radius", "8px"),
    ("color", "white"),
    ("font-weight", "500"),
    ("z-index", "10000"),
    ("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.2)"),
    ("transition", "transform 0.3s ease"),
];

/// Append the injected rules unless a previous boot already did.
pub fn inject(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(INJECTED_CSS));
    if let Err(err) = head.append_child(&style) {
        log::warn!("could not inject styles: {}", crate::dom::js_error_message(&err));
    }
}
