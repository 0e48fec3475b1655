use easel_engine::{
    Align, App, AppConfig, AppCtx, Canvas, Color, Image, ImageOptions, Key, MouseButton,
    ResizePolicy, Runtime, TextStyle, Vec2,
};

const SPRITE_PATH: &str = "assets/sprite.png";

const BACKGROUND: Color = Color::rgb(50, 50, 50);
const ACCENT: Color = Color::rgb(255, 196, 0);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Scene {
    Shapes,
    Images,
    Text,
}

struct Demo {
    scene: Scene,
    sprite: Option<Image>,
    /// Seconds since start, drives the orbiting dot.
    t: f32,
}

impl Demo {
    fn new() -> Self {
        Self { scene: Scene::Shapes, sprite: None, t: 0.0 }
    }

    fn draw_shapes(&self, canvas: &mut Canvas) {
        canvas.fill_rect((-300.0, 200.0), (-150.0, 100.0), Color::RED);
        canvas.stroke_rect((-100.0, 200.0), (50.0, 100.0), Color::GREEN, 6.0);

        canvas.fill_triangle((120.0, 100.0), (270.0, 100.0), (195.0, 220.0), Color::BLUE);
        canvas.stroke_triangle((120.0, -20.0), (270.0, -20.0), (195.0, 80.0), ACCENT, 3.0);

        canvas.fill_circle((-225.0, -50.0), 60.0, Color::rgb(0, 180, 180));
        canvas.stroke_circle((-25.0, -50.0), 60.0, Color::WHITE, 4.0);
        canvas.fill_ellipse((-125.0, -200.0), 220.0, 80.0, Color::rgba(255, 0, 255, 160));
        canvas.stroke_ellipse((150.0, -180.0), 160.0, 100.0, Color::rgb(120, 200, 80), 8.0);

        for i in 0..6 {
            let y = -260.0 + i as f32 * 8.0;
            canvas.line((80.0, y), (300.0, y + 20.0), Color::WHITE, 1.0 + i as f32);
        }

        let orbit = Vec2::new(self.t.cos(), self.t.sin()) * 90.0;
        canvas.fill_circle(orbit + Vec2::new(-25.0, -50.0), 8.0, ACCENT);
    }

    fn draw_images(&self, canvas: &mut Canvas) {
        let Some(sprite) = &self.sprite else {
            return;
        };

        let small = TextStyle::new(Color::WHITE).size(18).align(Align::BottomCenter);

        canvas.draw_image(sprite, (-200.0, 0.0), ImageOptions::new().align(Align::Center));
        canvas.draw_text((-200.0, -120.0), "natural", &small);

        let big = ImageOptions::new().width(192.0).align(Align::Center);
        canvas.draw_image(sprite, (20.0, 0.0), big);
        canvas.draw_text((20.0, -120.0), "nearest", &small);

        canvas.draw_image(sprite, (240.0, 0.0), big.antialias(true));
        canvas.draw_text((240.0, -120.0), "smooth", &small);
    }

    fn draw_text(&self, canvas: &mut Canvas) {
        let title = TextStyle::new(ACCENT).size(40).align(Align::TopCenter);
        canvas.draw_text((0.0, 270.0), "easel", &title);

        let body = TextStyle::new(Color::WHITE)
            .size(20)
            .wrap_width(300.0)
            .line_spacing(1.4);

        let paragraph = "The quick brown fox jumps over the lazy dog.\n\nLines wrap between words and keep explicit breaks.";
        canvas.stroke_rect((-380.0, 180.0), (-80.0, -120.0), Color::rgb(90, 90, 90), 1.0);
        canvas.draw_text((-380.0, 180.0), paragraph, &body.clone().align(Align::TopLeft));
        canvas.stroke_rect((80.0, 180.0), (380.0, -120.0), Color::rgb(90, 90, 90), 1.0);
        canvas.draw_text((380.0, 180.0), paragraph, &body.align(Align::TopRight));

        let hint = TextStyle::new(Color::rgb(160, 160, 160)).size(16).align(Align::BottomCenter);
        canvas.draw_text((0.0, -280.0), "1 shapes  2 images  3 text  esc quit", &hint);
    }

    fn draw_crosshair(&self, canvas: &mut Canvas) {
        let p = canvas.mouse_position();
        let color = if canvas.is_mouse_down(MouseButton::Left) { ACCENT } else { Color::WHITE };
        canvas.line(p - Vec2::new(10.0, 0.0), p + Vec2::new(10.0, 0.0), color, 1.0);
        canvas.line(p - Vec2::new(0.0, 10.0), p + Vec2::new(0.0, 10.0), color, 1.0);
    }
}

impl App for Demo {
    fn initialize(&mut self, _ctx: &mut AppCtx<'_>) {
        self.sprite = Some(Image::load(SPRITE_PATH));
    }

    fn update(&mut self, ctx: &mut AppCtx<'_>) {
        self.t = ctx.elapsed();

        let next = if ctx.is_key_pressed(Key::Digit1) {
            Some(Scene::Shapes)
        } else if ctx.is_key_pressed(Key::Digit2) {
            Some(Scene::Images)
        } else if ctx.is_key_pressed(Key::Digit3) {
            Some(Scene::Text)
        } else {
            None
        };

        if let Some(scene) = next.filter(|s| *s != self.scene) {
            log::info!("scene: {scene:?}");
            self.scene = scene;
        }
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);
        match self.scene {
            Scene::Shapes => self.draw_shapes(canvas),
            Scene::Images => self.draw_images(canvas),
            Scene::Text => self.draw_text(canvas),
        }
        self.draw_crosshair(canvas);
    }
}

fn main() {
    let config = AppConfig::new("easel demo")
        .size(800, 600)
        .resize(ResizePolicy::Scale);

    Runtime::launch(config, Demo::new());
}
