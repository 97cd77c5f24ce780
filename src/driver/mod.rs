pub mod microchip;
