fn main() {
    tile_platformer::game::run();
}
