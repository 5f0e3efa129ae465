use tag_cloud_generator::{css_class, generate_tag_cloud};

fn main() {
    env_logger::init();

    let text = "The cat sat. The dog ran.";

    let tag_cloud = generate_tag_cloud(text, "inline text", 3).unwrap();

    println!("Tag cloud for the given text \"{}\"", text);
    for item in tag_cloud.items {
        println!("{} ({}): {}", item.word, item.count, css_class(item.font_class));
    }
}
