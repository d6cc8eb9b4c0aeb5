//! Template engine setup and HTML templates.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template engine instance with embedded templates.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    // Embed templates directly in the binary (no external files needed)
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("index.html", INDEX_TEMPLATE),
    ])
    .expect("Failed to load templates");

    tera
});

/// Render a template with context
pub fn render(template: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(template, context)
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Brown Bear{% endblock %}</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: Georgia, 'Times New Roman', serif;
            background: #fdf6e3;
            color: #3a2d1a;
            line-height: 1.6;
        }

        .header {
            background: #8b5a2b;
            color: #fdf6e3;
            padding: 24px 32px;
            text-align: center;
        }
        .header h1 { font-size: 28px; }
        .header .author { font-style: italic; opacity: 0.85; margin-top: 4px; }

        .container {
            max-width: 860px;
            margin: 0 auto;
            padding: 32px 20px;
        }

        .page-card {
            background: #fff;
            border: 1px solid #e0d3b8;
            border-radius: 12px;
            margin-bottom: 28px;
            padding: 24px;
            display: flex;
            gap: 24px;
            align-items: center;
        }
        .page-card img {
            width: 220px;
            height: auto;
            border-radius: 8px;
            cursor: pointer;
            flex-shrink: 0;
        }
        .page-number {
            font-size: 13px;
            color: #a08a63;
            margin-bottom: 8px;
        }
        .page-text { font-size: 20px; }
        .sound-btn {
            margin-top: 12px;
            padding: 8px 18px;
            border: none;
            border-radius: 20px;
            background: #8b5a2b;
            color: #fdf6e3;
            font-size: 14px;
            cursor: pointer;
        }
        .sound-btn:hover { background: #6d451f; }

        .fullscreen {
            position: fixed;
            inset: 0;
            background: rgba(0, 0, 0, 0.85);
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 10;
        }
        .fullscreen img { max-width: 90vw; max-height: 90vh; }

        .empty {
            text-align: center;
            padding: 64px 32px;
            color: #a08a63;
        }
    </style>
</head>
<body>
    {% block content %}{% endblock %}
    <script src="/static_db/js/script.js"></script>
</body>
</html>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{% if has_book %}{{ title }}{% else %}Brown Bear{% endif %}{% endblock %}
{% block content %}
<header class="header">
    {% if has_book %}
    <h1>{{ title }}</h1>
    <div class="author">by {{ author }}</div>
    {% else %}
    <h1>Brown Bear</h1>
    {% endif %}
</header>
<main class="container">
    {% if pages %}
    {% for page in pages %}
    <div class="page-card">
        <img src="/static_db/{{ page.image }}" alt="{{ page.animal }}"
             onclick="toggleFullscreen('{{ page.image }}')">
        <div>
            <div class="page-number">Page {{ page.number }}</div>
            <div class="page-text">{{ page.content }}</div>
            <button class="sound-btn" onclick="playSound('{{ page.sound_id }}')">&#9658; {{ page.animal }}</button>
            <audio id="{{ page.sound_id }}" src="/static_db/{{ page.audio }}" preload="none"></audio>
        </div>
    </div>
    {% endfor %}
    {% else %}
    <div class="empty">
        <p>No pages yet</p>
        <p>Run the seed command to load the book.</p>
    </div>
    {% endif %}
</main>
{% endblock %}"##;
