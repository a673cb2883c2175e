pub mod configuration;

pub mod math {
    pub mod curve {
        pub mod curve;
    }

    pub mod point2d;
    pub mod round;

    pub mod function {
        pub mod realfunction;
        pub mod evaluationerror;
        pub mod guardedfunction;
        pub mod expressionfunction;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod interval;
        pub mod trapezoidalintegrator;
    }
}

pub mod objectwithuuid;

pub mod plot {
    pub mod ploterror;
    pub mod plotdata;
    pub mod linearscale;
    pub mod chartframe;
}
