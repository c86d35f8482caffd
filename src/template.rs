// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tera::{Context, Tera};

use crate::{
    config::Config,
    page::{POEMS, VISUALS},
    util::escape,
};

/// Directory, under the site source, whose page shells replace the built-in ones.
pub const TEMPLATE_DIR: &str = "templates";

const POEMS_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Poems | {{ title }}</title>
    {% if stylesheet %}<link rel="stylesheet" href="{{ stylesheet }}">{% endif %}
  </head>
  <body>
    <header><h1>{{ title }}</h1><nav><a href="poems.html">Poems</a> <a href="visuals.html">Visuals</a></nav></header>
    <main class="poems">
{{ content }}
    </main>
    {% if script %}<script src="{{ script }}"></script>{% endif %}
  </body>
</html>
"#;

const VISUALS_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Visuals | {{ title }}</title>
    {% if stylesheet %}<link rel="stylesheet" href="{{ stylesheet }}">{% endif %}
  </head>
  <body>
    <header><h1>{{ title }}</h1><nav><a href="poems.html">Poems</a> <a href="visuals.html">Visuals</a></nav></header>
    <main>
      <div id="visuals-grid" class="visuals-grid">
{{ content }}
      </div>
    </main>
{{ lightbox }}
    {% if script %}<script src="{{ script }}"></script>{% endif %}
  </body>
</html>
"#;

#[derive(Clone, Debug)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.join(TEMPLATE_DIR),
        }
    }

    /// Creates a Tera instance with the built-in shells, overridden by any
    /// same-named file in the template directory.
    /// Also disables autoescape
    fn create_tera(&self) -> Result<Tera, tera::Error> {
        let mut tera: Tera = Tera::default();

        tera.add_raw_template(POEMS, POEMS_SHELL)?;
        tera.add_raw_template(VISUALS, VISUALS_SHELL)?;

        let overrides: Vec<(PathBuf, Option<&str>)> = [POEMS, VISUALS]
            .iter()
            .map(|name| (self.dir.join(name), Some(*name)))
            .filter(|(path, _)| path.is_file())
            .collect();

        for (path, _) in overrides.iter() {
            log::info!("Using page shell {:?}", path);
        }

        tera.add_template_files(overrides)?;

        tera.autoescape_on(vec![]); // Fragments arrive already escaped.

        Ok(tera)
    }

    /// Render a page.
    pub fn render(
        &self,
        template: &str,
        config: &Config,
        contents: &str,
        ctx: Option<HashMap<&str, String>>,
    ) -> Result<String, tera::Error> {
        let mut context: Context = Context::new();
        let attribute = |value: &Option<String>| escape(value.as_deref().unwrap_or(""));

        context.insert("content", contents);
        context.insert("title", &escape(&config.title));
        context.insert("stylesheet", &attribute(&config.stylesheet));
        context.insert("script", &attribute(&config.script));

        if let Some(ctx) = ctx {
            for (key, value) in ctx.iter() {
                context.insert(*key, value);
            }
        }

        self.create_tera()?.render(template, &context)
    }
}
