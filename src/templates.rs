use once_cell::sync::Lazy;
use tera::Tera;

pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", include_str!("../templates/index.html"))
        .expect("failed to add index.html template");
    tera.add_raw_template("detail.html", include_str!("../templates/detail.html"))
        .expect("failed to add detail.html template");
    tera.add_raw_template("results.html", include_str!("../templates/results.html"))
        .expect("failed to add results.html template");
    tera
});
