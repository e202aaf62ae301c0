use grader_web::App;

fn main() {
    dioxus::launch(App);
}
